//! Minimal project generator
//!
//! Writes a fixed file set without reading any template source.

use crate::project::ProjectDescriptor;
use crate::templates::manifest::{PackageManifest, MANIFEST_FILE};
use anyhow::{Context, Result};
use tokio::fs;

/// Starter page written to `app/pages/index.zen`
pub const INDEX_PAGE: &str = include_str!("../../assets/index.zen");

/// Relative path of the starter page
pub const INDEX_PAGE_PATH: &str = "app/pages/index.zen";

/// Content directories every project starts with
const APP_DIRS: &[&str] = &["app/pages", "app/layouts", "app/components"];

/// Generate the minimal project tree. Returns the written files, relative to
/// the project root.
pub async fn generate_minimal(project: &ProjectDescriptor) -> Result<Vec<String>> {
    let target_dir = project.target_path();

    fs::create_dir_all(target_dir)
        .await
        .context("Failed to create target directory")?;

    for dir in APP_DIRS {
        let path = target_dir.join(dir);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    }

    let manifest = PackageManifest::canonical(project.name()).to_json()?;
    let manifest_path = target_dir.join(MANIFEST_FILE);
    fs::write(&manifest_path, manifest)
        .await
        .with_context(|| format!("Failed to write file: {}", manifest_path.display()))?;

    let page_path = target_dir.join(INDEX_PAGE_PATH);
    fs::write(&page_path, INDEX_PAGE)
        .await
        .with_context(|| format!("Failed to write file: {}", page_path.display()))?;

    Ok(vec![MANIFEST_FILE.to_string(), INDEX_PAGE_PATH.to_string()])
}
