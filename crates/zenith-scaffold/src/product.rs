//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to configure the scaffolding behavior:
//! identity, where templates come from, which package managers to try, and
//! what to tell the user once the project exists.

use crate::project::ProjectDescriptor;
use crate::runtime::Installer;
use std::path::PathBuf;

/// Configuration trait for a scaffolding product
///
/// The materialization strategy is part of this static configuration rather
/// than a CLI argument: a product either ships a default template directory or
/// relies on the minimal generator, and the environment variable named by
/// [`ProductConfig::template_dir_env`] can point at a local template instead.
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for selecting a local template directory
    fn template_dir_env(&self) -> &'static str;

    /// Template directory copied when no env override is set.
    /// `None` means the minimal generator is used.
    fn default_template_dir(&self) -> Option<PathBuf> {
        None
    }

    /// Dependency installers in fallback order (primary first)
    fn installers(&self) -> Vec<Installer>;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, project: &ProjectDescriptor) -> Vec<String>;
}
