//! Project name resolution and target path validation

use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal input errors. Both are raised before anything is written to disk.
#[derive(Debug, Error)]
pub enum CreateError {
    #[error("Project name is required")]
    EmptyName,

    #[error("Directory \"{name}\" already exists.")]
    TargetExists { name: String, path: PathBuf },
}

/// A validated project: its name and the absolute directory it will live in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    name: String,
    target_path: PathBuf,
}

impl ProjectDescriptor {
    /// Resolve `name` against `cwd`, failing if anything already exists there
    pub fn resolve(cwd: &Path, name: &str) -> Result<Self, CreateError> {
        let target_path = cwd.join(name);

        // symlink_metadata so a dangling symlink still counts as taken
        if target_path.symlink_metadata().is_ok() {
            return Err(CreateError::TargetExists {
                name: name.to_string(),
                path: target_path,
            });
        }

        Ok(Self {
            name: name.to_string(),
            target_path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }
}

/// Pick the project name from the CLI argument, or ask for it once.
///
/// Surrounding whitespace is trimmed; anything else in the name is kept as-is.
pub fn resolve_name<F>(arg: Option<String>, prompt: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    let raw = match arg {
        Some(name) => name,
        None => prompt()?,
    };

    let name = raw.trim();
    if name.is_empty() {
        return Err(CreateError::EmptyName.into());
    }

    Ok(name.to_string())
}
