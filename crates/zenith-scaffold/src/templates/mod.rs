//! Project materialization
//!
//! This module provides:
//! - The package.json model and its partial rewrite
//! - The minimal generator (fixed file set)
//! - The template copier (local directory with exclusions)
//! - Strategy selection from product configuration

pub mod copier;
pub mod manifest;
pub mod minimal;

use crate::product::ProductConfig;
use crate::project::ProjectDescriptor;
use anyhow::Result;
use std::path::PathBuf;

pub use copier::copy_template;
pub use manifest::PackageManifest;
pub use minimal::generate_minimal;

/// How the project files are produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Write the fixed starter file set
    Minimal,
    /// Copy a local template directory
    Template(PathBuf),
}

impl Strategy {
    /// Select the strategy from the product's static configuration.
    ///
    /// A non-empty value in the product's template env var wins over the
    /// product default.
    pub fn from_config<C: ProductConfig>(config: &C) -> Self {
        let from_env = std::env::var_os(config.template_dir_env())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self::select(from_env, config.default_template_dir())
    }

    fn select(from_env: Option<PathBuf>, default_dir: Option<PathBuf>) -> Self {
        match from_env.or(default_dir) {
            Some(dir) => Strategy::Template(dir),
            None => Strategy::Minimal,
        }
    }
}

/// Produce the project tree on disk. Returns the written files relative to
/// the project root.
pub async fn materialize(strategy: &Strategy, project: &ProjectDescriptor) -> Result<Vec<String>> {
    match strategy {
        Strategy::Minimal => generate_minimal(project).await,
        Strategy::Template(dir) => copy_template(dir, project).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_by_default() {
        assert_eq!(Strategy::select(None, None), Strategy::Minimal);
    }

    #[test]
    fn test_env_overrides_default_template() {
        let strategy = Strategy::select(
            Some(PathBuf::from("/tmp/override")),
            Some(PathBuf::from("/opt/zenith-site")),
        );
        assert_eq!(strategy, Strategy::Template(PathBuf::from("/tmp/override")));
    }

    #[test]
    fn test_default_template_used_without_env() {
        let strategy = Strategy::select(None, Some(PathBuf::from("/opt/zenith-site")));
        assert_eq!(strategy, Strategy::Template(PathBuf::from("/opt/zenith-site")));
    }

    #[tokio::test]
    async fn test_materialize_dispatches_to_copier() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        std::fs::write(src.path().join("README.md"), "hello").unwrap();

        let project = ProjectDescriptor::resolve(out.path(), "site").unwrap();
        let strategy = Strategy::Template(src.path().to_path_buf());
        let written = materialize(&strategy, &project).await.unwrap();

        assert_eq!(written, ["README.md", "package.json"]);
        assert!(!project.target_path().join("app").exists());
    }
}
