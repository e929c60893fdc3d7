//! Post-materialization tooling
//!
//! Runs the package manager inside the new project.

pub mod install;

pub use install::{default_installers, install_with_fallback, InstallError, InstallOutcome, Installer};
