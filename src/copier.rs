//! File-map construction, adjustment and execution.
//! The copy stage is planned as an explicit source-to-destinations map so
//! the pipeline can rewrite entries before any file is touched.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::constants::IGNORE_FILES;
use crate::error::{Error, Result};

/// Mapping from a source file to an ordered list of destination paths.
/// One source may fan out to several destinations.
pub type FileMap = IndexMap<PathBuf, Vec<PathBuf>>;

/// Builds the copy plan: every regular file under the seed directory maps
/// to its mirrored path under the target directory.
pub fn build_file_map(seed_dir: &Path, target_dir: &Path) -> Result<FileMap> {
    let mut file_map = FileMap::new();

    for entry in WalkDir::new(seed_dir) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(seed_dir)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        file_map
            .insert(entry.path().to_path_buf(), vec![target_dir.join(relative)]);
    }

    Ok(file_map)
}

/// Pre-copy hook: redirects the undotted ignore-file sources to their
/// dotted destinations at the target root. Entries are added (or replaced)
/// unconditionally; a missing source is a copy-time concern.
pub fn adjust_file_map(file_map: &mut FileMap, seed_dir: &Path, target_dir: &Path) {
    for (source_name, target_name) in IGNORE_FILES {
        file_map.insert(seed_dir.join(source_name), vec![target_dir.join(target_name)]);
    }
}

/// Executes the copy plan in insertion order.
///
/// A source missing from disk is skipped with a warning, since seeds may
/// legitimately omit optional files such as `npmignore`. Other filesystem
/// faults propagate.
pub fn execute_file_map(file_map: &FileMap) -> Result<()> {
    for (source, destinations) in file_map {
        if !source.exists() {
            warn!("skipping missing seed file: {}", source.display());
            continue;
        }
        for destination in destinations {
            if let Some(parent) = destination.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(source, destination)?;
            debug!("copied {} -> {}", source.display(), destination.display());
        }
    }
    Ok(())
}
