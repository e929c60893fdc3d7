//! Charm-style CLI flow using cliclack

use crate::product::ProductConfig;
use crate::project::{self, ProjectDescriptor};
use crate::runtime::{install_with_fallback, InstallOutcome};
use crate::templates::{self, Strategy};
use anyhow::{Context, Result};
use std::io::{BufRead, IsTerminal, Write};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub name: Option<String>,
}

/// Run the create flow. Errors are reported to the user before being returned.
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    cliclack::intro(format!("Create {} App", config.display_name()))?;

    match create(config, args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            // the error is returned either way; a failed write here has nowhere to go
            let _ = if is_interrupted(&e) {
                cliclack::outro_cancel("Cancelled")
            } else {
                cliclack::log::error(format!("{:#}", e))
            };
            Err(e)
        }
    }
}

/// Whether the flow stopped because the user pressed Ctrl+C at a prompt
pub fn is_interrupted(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::Interrupted)
    })
}

async fn create<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    // Step 1: Resolve name and target
    let name = project::resolve_name(args.name, prompt_project_name)?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let project = ProjectDescriptor::resolve(&cwd, &name)?;

    // Step 2: Materialize
    let strategy = Strategy::from_config(config);
    create_project(&strategy, &project).await?;

    // Step 3: Install dependencies
    install_dependencies(config, &project).await?;

    // Step 4: Show next steps
    cliclack::log::success(format!("✨ {} created successfully!", project.name()))?;
    print_next_steps(config, &project)?;

    Ok(())
}

/// Ask for the project name once. Falls back to a plain line read when
/// stdin is not a terminal.
fn prompt_project_name() -> Result<String> {
    if std::io::stdin().is_terminal() {
        let name: String = cliclack::input("Project name")
            .placeholder("my-zenith-app")
            .required(false)
            .interact()?;
        return Ok(name);
    }

    print!("Project name: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read project name")?;
    Ok(line)
}

async fn create_project(strategy: &Strategy, project: &ProjectDescriptor) -> Result<()> {
    cliclack::log::info("Creating project structure...")?;
    if let Strategy::Template(dir) = strategy {
        cliclack::log::info(format!("Copying template from {}", dir.display()))?;
    }

    let spinner = cliclack::spinner();
    spinner.start("Writing files...");

    let written = match templates::materialize(strategy, project).await {
        Ok(written) => written,
        Err(e) => {
            spinner.error("Failed to create project files");
            return Err(e);
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        project.target_path().display()
    ));

    Ok(())
}

async fn install_dependencies<C: ProductConfig>(
    config: &C,
    project: &ProjectDescriptor,
) -> Result<()> {
    cliclack::log::info("Installing dependencies...")?;

    let installers = config.installers();
    let outcome = install_with_fallback(project.target_path(), &installers, |installer, e| {
        cliclack::log::warning(format!("{} failed: {}", installer.command_line(), e))
    })
    .await;

    match outcome {
        InstallOutcome::Installed(installer) => {
            cliclack::log::success(format!(
                "Dependencies installed with {}",
                installer.program
            ))?;
        }
        InstallOutcome::Manual => {
            let manual = installers
                .first()
                .map(|i| i.command_line())
                .unwrap_or_else(|| "your package manager".to_string());
            cliclack::log::warning(format!(
                "Could not install dependencies, you may need to run `{}` manually",
                manual
            ))?;
        }
    }

    Ok(())
}

fn print_next_steps<C: ProductConfig>(config: &C, project: &ProjectDescriptor) -> Result<()> {
    let steps = config.next_steps(project);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
