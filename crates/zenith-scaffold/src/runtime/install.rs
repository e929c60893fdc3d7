//! Dependency installation through external package managers
//!
//! Installers run one after another with inherited stdio so their output is
//! visible live. A failing installer is never fatal: the next one in the
//! chain is tried, and if every one fails the caller gets
//! [`InstallOutcome::Manual`].

use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command as TokioCommand;

/// An external install command, e.g. `bun install`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installer {
    /// Program looked up on PATH
    pub program: String,
    pub args: Vec<String>,
}

/// Why a single installer attempt failed
#[derive(Debug, Error)]
pub enum InstallError {
    #[error("failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with code {code}")]
    ExitStatus { command: String, code: i32 },
}

/// Result of the whole fallback chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// This installer succeeded
    Installed(Installer),
    /// Every installer failed; the user has to install by hand
    Manual,
}

impl Installer {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Command line shown to the user
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the installer in `dir` and wait for it to exit
    pub async fn run(&self, dir: &Path) -> Result<(), InstallError> {
        let cmd = self.command_line();
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let status = TokioCommand::new(&self.program)
            .args(&self.args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| InstallError::Launch {
                command: cmd.clone(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(InstallError::ExitStatus {
                command: cmd,
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

/// `bun install`, falling back to `npm install`
pub fn default_installers() -> Vec<Installer> {
    vec![
        Installer::new("bun", &["install"]),
        Installer::new("npm", &["install"]),
    ]
}

/// Try each installer once, in order, until one succeeds.
///
/// `on_failure` is called for every failed attempt before the next one starts.
/// An error from `on_failure` (e.g. the terminal went away) does not stop the
/// chain; the next installer still runs.
pub async fn install_with_fallback<F>(
    dir: &Path,
    installers: &[Installer],
    mut on_failure: F,
) -> InstallOutcome
where
    F: FnMut(&Installer, &InstallError) -> std::io::Result<()>,
{
    for installer in installers {
        match installer.run(dir).await {
            Ok(()) => return InstallOutcome::Installed(installer.clone()),
            Err(e) => {
                if let Err(report_err) = on_failure(installer, &e) {
                    eprintln!("{} {}", "Failed to report installer error:".red(), report_err);
                }
            }
        }
    }

    InstallOutcome::Manual
}
