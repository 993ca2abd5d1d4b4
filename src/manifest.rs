//! Target manifest (package.json) script merging.
//! The manifest is treated strictly as structured data parsed from text; a
//! parse failure skips this step with a warning instead of failing the run.

use std::fs;
use std::path::Path;

use serde_json::{json, Map, Value};

use crate::constants::{MANIFEST_FILE, MANIFEST_SCRIPTS};
use crate::error::Result;
use crate::logger::Reporter;

fn fixed_scripts() -> Map<String, Value> {
    MANIFEST_SCRIPTS
        .iter()
        .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
        .collect()
}

fn write_manifest(path: &Path, manifest: &Value) -> Result<()> {
    // serde_json pretty printing uses the 2-space indentation npm expects.
    fs::write(path, format!("{}\n", serde_json::to_string_pretty(manifest)?))?;
    Ok(())
}

/// Merges the fixed script entries into `<target_dir>/package.json`,
/// creating the manifest when absent. Pre-existing script entries win on
/// key collision.
///
/// An unparseable existing manifest is left untouched; the failure is
/// reported and the run continues.
pub fn merge_scripts(target_dir: &Path, reporter: &Reporter) -> Result<()> {
    let manifest_path = target_dir.join(MANIFEST_FILE);

    if !manifest_path.exists() {
        let manifest = json!({ "scripts": fixed_scripts() });
        return write_manifest(&manifest_path, &manifest);
    }

    let content = fs::read_to_string(&manifest_path)?;
    let mut manifest: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            reporter.warn(&format!(
                "could not parse {}: {}",
                manifest_path.display(),
                e
            ));
            return Ok(());
        }
    };

    let root = match manifest.as_object_mut() {
        Some(root) => root,
        None => {
            reporter.warn(&format!(
                "could not parse {}: expected a JSON object",
                manifest_path.display()
            ));
            return Ok(());
        }
    };

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if let Some(scripts) = scripts.as_object_mut() {
        for (key, value) in fixed_scripts() {
            scripts.entry(key).or_insert(value);
        }
    }

    write_manifest(&manifest_path, &manifest)
}
