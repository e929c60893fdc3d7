//! Zenith CLI - Project scaffolding for Zenith applications

use clap::Parser;
use zenith_scaffold::runtime::{default_installers, Installer};
use zenith_scaffold::tui::CreateArgs;
use zenith_scaffold::{ProductConfig, ProjectDescriptor};

/// Zenith product configuration
#[derive(Clone)]
pub struct ZenithConfig;

impl ProductConfig for ZenithConfig {
    fn display_name(&self) -> &'static str {
        "Zenith"
    }

    fn template_dir_env(&self) -> &'static str {
        "ZENITH_TEMPLATE_DIR"
    }

    fn installers(&self) -> Vec<Installer> {
        default_installers()
    }

    fn next_steps(&self, project: &ProjectDescriptor) -> Vec<String> {
        vec![
            format!("cd {}", project.name()),
            "bun run dev".to_string(),
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "zenith-create")]
#[command(about = "Create a new Zenith application")]
#[command(version)]
pub struct Args {
    /// Project name (prompted for when omitted)
    pub name: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = ZenithConfig;

    let result = zenith_scaffold::run(&config, CreateArgs { name: args.name }).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    // The error was already reported by the flow
    if let Err(e) = result {
        std::process::exit(exit_code(&e));
    }
}

/// 130 when the user interrupted a prompt, 1 for every other failure
fn exit_code(err: &anyhow::Error) -> i32 {
    if zenith_scaffold::tui::is_interrupted(err) {
        130
    } else {
        1
    }
}
