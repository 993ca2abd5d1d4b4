//! Post-copy processing.
//! Runs after every file is physically in place: renders tokens in the
//! fixed file list, then merges npm scripts into the target manifest.

use std::fs;
use std::path::Path;

use log::debug;

use crate::config::ResolvedConfig;
use crate::constants::RENDER_FILES;
use crate::error::Result;
use crate::logger::Reporter;
use crate::manifest;
use crate::render::render_tokens;

/// Rewrites each listed target file in place with its tokens rendered,
/// then merges the fixed script entries into the manifest. Render-time
/// filesystem faults propagate; only the manifest-merge sub-step downgrades
/// its parse failure to a warning.
pub fn post_process(
    config: &ResolvedConfig,
    target_dir: &Path,
    reporter: &Reporter,
) -> Result<()> {
    reporter.info("formatting files");
    for file_name in RENDER_FILES {
        let path = target_dir.join(file_name);
        if !path.exists() {
            debug!("render target not present, skipping: {}", path.display());
            continue;
        }
        let content = fs::read_to_string(&path)?;
        fs::write(&path, render_tokens(&content, config))?;
        reporter.info(&format!("  {}", path.display()));
    }
    reporter.success("formatting finished");

    manifest::merge_scripts(target_dir, reporter)
}
