//! package.json model and rewriting

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

/// File name of the manifest at the project root
pub const MANIFEST_FILE: &str = "package.json";

const VERSION: &str = "0.1.0";

/// Scripts every new project gets, in output order
const SCRIPTS: &[(&str, &str)] = &[
    ("dev", "zen-dev"),
    ("build", "zen-build"),
    ("preview", "zen-preview"),
    ("test", "bun test"),
];

const DEPENDENCIES: &[(&str, &str)] = &[("@zenithbuild/core", "^0.1.0")];

const DEV_DEPENDENCIES: &[(&str, &str)] = &[("@types/bun", "latest")];

/// The manifest written by the minimal generator.
///
/// Field order here is the key order in the written file.
#[derive(Debug, Clone, Serialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: Map<String, Value>,
    pub dependencies: Map<String, Value>,
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Map<String, Value>,
}

impl PackageManifest {
    /// Canonical manifest for a new project. The name is stored verbatim.
    pub fn canonical(name: &str) -> Self {
        Self {
            name: name.to_string(),
            version: VERSION.to_string(),
            private: true,
            module_type: "module".to_string(),
            scripts: string_map(SCRIPTS),
            dependencies: string_map(DEPENDENCIES),
            dev_dependencies: string_map(DEV_DEPENDENCIES),
        }
    }

    /// Render as 4-space indented JSON
    pub fn to_json(&self) -> Result<String> {
        to_pretty_json(self)
    }
}

/// Overwrite the identity, script and dependency fields of an existing
/// manifest, keeping every other key and the original key order.
pub fn rewrite_manifest(contents: &str, name: &str) -> Result<String> {
    let value: Value = serde_json::from_str(contents).context("Failed to parse package.json")?;
    let Value::Object(mut pkg) = value else {
        anyhow::bail!("package.json must contain a JSON object");
    };

    // Map::insert keeps an existing key in place; new keys go to the end
    pkg.insert("name".to_string(), Value::from(name));
    pkg.insert("version".to_string(), Value::from(VERSION));
    pkg.insert("private".to_string(), Value::Bool(true));
    pkg.insert("scripts".to_string(), Value::Object(string_map(SCRIPTS)));
    pkg.insert(
        "dependencies".to_string(),
        Value::Object(string_map(DEPENDENCIES)),
    );

    to_pretty_json(&pkg)
}

/// Serialize with 4-space indentation and a trailing newline
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut ser)
        .context("Failed to serialize package.json")?;

    let mut out = String::from_utf8(buf).context("package.json is not valid UTF-8")?;
    out.push('\n');
    Ok(out)
}

fn string_map(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::from(*v)))
        .collect()
}
