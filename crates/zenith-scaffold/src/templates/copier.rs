//! Template directory copying with path-segment exclusion

use crate::project::ProjectDescriptor;
use crate::templates::manifest::{rewrite_manifest, PackageManifest, MANIFEST_FILE};
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;
use tokio::fs;
use walkdir::{DirEntry, WalkDir};

/// Entry names never copied out of a template, at any depth
pub const EXCLUDED: &[&str] = &[".git", "node_modules", "bun.lockb", ".DS_Store", "dist"];

fn is_excluded(name: &OsStr) -> bool {
    EXCLUDED.iter().any(|excluded| name == OsStr::new(excluded))
}

/// Copy `template_dir` into the project directory, then rewrite its manifest.
///
/// Returns the copied files (relative to the project root), plus
/// `package.json` when it had to be written from scratch.
pub async fn copy_template(
    template_dir: &Path,
    project: &ProjectDescriptor,
) -> Result<Vec<String>> {
    let target_dir = project.target_path();

    if !template_dir.is_dir() {
        anyhow::bail!("Template directory not found: {}", template_dir.display());
    }

    // Ensure target directory exists
    fs::create_dir_all(target_dir)
        .await
        .context("Failed to create target directory")?;

    let mut copied_files = copy_tree(template_dir, target_dir).await?;

    let manifest_path = target_dir.join(MANIFEST_FILE);
    let has_manifest = fs::try_exists(&manifest_path)
        .await
        .with_context(|| format!("Failed to check {}", manifest_path.display()))?;
    if has_manifest {
        let contents = fs::read_to_string(&manifest_path)
            .await
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        let rewritten = rewrite_manifest(&contents, project.name())
            .with_context(|| format!("Invalid manifest in template: {}", template_dir.display()))?;
        fs::write(&manifest_path, rewritten)
            .await
            .with_context(|| format!("Failed to write file: {}", manifest_path.display()))?;
    } else {
        let manifest = PackageManifest::canonical(project.name()).to_json()?;
        fs::write(&manifest_path, manifest)
            .await
            .with_context(|| format!("Failed to write file: {}", manifest_path.display()))?;
        copied_files.push(MANIFEST_FILE.to_string());
    }

    Ok(copied_files)
}

/// Mirror `src` into `dest`, skipping excluded entries without descending into them.
///
/// Symlinks are followed, so a linked directory is mirrored as a real
/// directory. A link cycle is reported as an error.
async fn copy_tree(src: &Path, dest: &Path) -> Result<Vec<String>> {
    let mut copied_files = Vec::new();

    let walker = WalkDir::new(src)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry: &DirEntry| !is_excluded(entry.file_name()));

    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to read template directory: {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .context("Template entry outside of template directory")?;
        let target_path = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target_path)
                .await
                .with_context(|| format!("Failed to create directory: {}", target_path.display()))?;
        } else {
            fs::copy(entry.path(), &target_path).await.with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target_path.display()
                )
            })?;
            copied_files.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }

    Ok(copied_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as stdfs;

    fn write(path: &Path, contents: &[u8]) {
        stdfs::create_dir_all(path.parent().unwrap()).unwrap();
        stdfs::write(path, contents).unwrap();
    }

    fn template_with_noise(root: &Path) {
        write(&root.join("README.md"), b"# Zenith site\n");
        write(&root.join("app/pages/index.zen"), b"<main>hi</main>\n");
        write(&root.join("app/assets/logo.bin"), &[0u8, 159, 146, 150, 255]);
        write(&root.join(".git/HEAD"), b"ref: refs/heads/main\n");
        write(&root.join("node_modules/left-pad/index.js"), b"module.exports = 1\n");
        write(&root.join("app/.git/config"), b"[core]\n");
        write(&root.join("app/pages/.DS_Store"), b"\0\0");
        write(&root.join("app/components/dist/bundle.js"), b"bundle\n");
        write(&root.join("bun.lockb"), b"lock");
        write(&root.join("dist/index.html"), b"<html></html>");
    }

    fn all_names(root: &Path) -> Vec<String> {
        WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_exclusion_matches_whole_segments_only() {
        assert!(is_excluded(OsStr::new(".git")));
        assert!(is_excluded(OsStr::new("node_modules")));
        assert!(!is_excluded(OsStr::new(".gitignore")));
        assert!(!is_excluded(OsStr::new("distribution")));
        assert!(!is_excluded(OsStr::new("Dist")));
    }

    #[tokio::test]
    async fn test_excluded_entries_skipped_at_any_depth() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        template_with_noise(src.path());

        let project = ProjectDescriptor::resolve(out.path(), "site").unwrap();
        copy_template(src.path(), &project).await.unwrap();

        for name in all_names(project.target_path()) {
            assert!(
                !EXCLUDED.contains(&name.as_str()),
                "excluded entry copied: {}",
                name
            );
        }
        // the non-excluded parent of an excluded dir is still mirrored
        assert!(project.target_path().join("app/components").is_dir());
    }

    #[tokio::test]
    async fn test_files_copied_byte_for_byte() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        template_with_noise(src.path());

        let project = ProjectDescriptor::resolve(out.path(), "site").unwrap();
        let copied = copy_template(src.path(), &project).await.unwrap();

        for file in ["README.md", "app/pages/index.zen", "app/assets/logo.bin"] {
            assert_eq!(
                stdfs::read(src.path().join(file)).unwrap(),
                stdfs::read(project.target_path().join(file)).unwrap(),
                "{} differs",
                file
            );
            assert!(copied.iter().any(|c| c == file), "{} not reported", file);
        }
    }

    #[tokio::test]
    async fn test_template_manifest_is_rewritten() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(
            &src.path().join("package.json"),
            br#"{"name": "zenith-site", "version": "9.9.9", "keywords": ["zenith"]}"#,
        );

        let project = ProjectDescriptor::resolve(out.path(), "blog").unwrap();
        copy_template(src.path(), &project).await.unwrap();

        let written = stdfs::read_to_string(project.target_path().join("package.json")).unwrap();
        let pkg: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(pkg["name"], "blog");
        assert_eq!(pkg["version"], "0.1.0");
        assert_eq!(pkg["private"], true);
        assert_eq!(pkg["keywords"][0], "zenith");
        assert!(written.contains("\n    \"name\": \"blog\""));
    }

    #[tokio::test]
    async fn test_missing_manifest_gets_canonical_one() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(&src.path().join("app/pages/index.zen"), b"<main/>");

        let project = ProjectDescriptor::resolve(out.path(), "blog").unwrap();
        let copied = copy_template(src.path(), &project).await.unwrap();

        assert!(copied.contains(&"package.json".to_string()));
        let written = stdfs::read_to_string(project.target_path().join("package.json")).unwrap();
        assert_eq!(written, PackageManifest::canonical("blog").to_json().unwrap());
    }

    #[tokio::test]
    async fn test_missing_template_dir_fails() {
        let out = tempfile::tempdir().unwrap();
        let project = ProjectDescriptor::resolve(out.path(), "blog").unwrap();

        let result = copy_template(&out.path().join("nope"), &project).await;
        assert!(result.is_err());
        assert!(!project.target_path().exists());
    }

    #[tokio::test]
    async fn test_bundled_site_template() {
        let template = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../templates/zenith-site");
        let out = tempfile::tempdir().unwrap();

        let project = ProjectDescriptor::resolve(out.path(), "blog").unwrap();
        copy_template(&template, &project).await.unwrap();

        let root = project.target_path();
        assert!(root.join("app/pages/about.zen").is_file());
        assert!(root.join("app/layouts/Default.zen").is_file());
        assert!(root.join("app/components/.gitkeep").is_file());

        let pkg: serde_json::Value =
            serde_json::from_str(&stdfs::read_to_string(root.join("package.json")).unwrap())
                .unwrap();
        assert_eq!(pkg["name"], "blog");
        assert_eq!(pkg["version"], "0.1.0");
        assert_eq!(pkg["scripts"]["preview"], "zen-preview");
        assert_eq!(pkg["description"], "Starter site for Zenith applications");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlinked_directory_is_mirrored() {
        let src = tempfile::tempdir().unwrap();
        let shared = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(&shared.path().join("Card.zen"), b"<div class=\"card\"/>");
        write(&src.path().join("app/pages/index.zen"), b"<main/>");
        std::os::unix::fs::symlink(shared.path(), src.path().join("app/components")).unwrap();

        let project = ProjectDescriptor::resolve(out.path(), "site").unwrap();
        let copied = copy_template(src.path(), &project).await.unwrap();

        let components = project.target_path().join("app/components");
        assert!(components.is_dir());
        assert!(!components.symlink_metadata().unwrap().file_type().is_symlink());
        assert_eq!(
            stdfs::read(components.join("Card.zen")).unwrap(),
            b"<div class=\"card\"/>"
        );
        assert!(copied.contains(&"app/components/Card.zen".to_string()));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_cycle_fails() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        stdfs::create_dir_all(src.path().join("app")).unwrap();
        std::os::unix::fs::symlink(src.path(), src.path().join("app/loop")).unwrap();

        let project = ProjectDescriptor::resolve(out.path(), "site").unwrap();
        assert!(copy_template(src.path(), &project).await.is_err());
    }
}
