//! Zenith Scaffold - Shared library for the `zenith-create` CLI
//!
//! This library creates new Zenith applications on disk and wires them up to
//! the package manager. The binary only supplies a product configuration and
//! the CLI surface; everything else lives here.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Name resolution, target validation, the two
//!   materialization strategies and the installer fallback chain
//! - **Layer 2: Product Configuration** - `ProductConfig` trait for identity,
//!   template source and installer selection
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based flow (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use zenith_scaffold::{project, templates, ProjectDescriptor};
//!
//! let cwd = std::env::current_dir()?;
//! let name = project::resolve_name(Some("my-app".into()), || unreachable!())?;
//! let project = ProjectDescriptor::resolve(&cwd, &name)?;
//! let written = templates::materialize(&templates::Strategy::Minimal, &project).await?;
//! ```

pub mod product;
pub mod project;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use product::ProductConfig;
pub use project::{CreateError, ProjectDescriptor};
pub use runtime::{install_with_fallback, InstallOutcome, Installer};
pub use templates::{copy_template, generate_minimal, materialize, PackageManifest, Strategy};

#[cfg(feature = "tui")]
pub use tui::run;
