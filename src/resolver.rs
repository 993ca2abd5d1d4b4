//! Scaffold parameter resolution.
//! Merges caller-supplied parameters with interactively collected answers
//! into an immutable `ResolvedConfig`. This stage performs no filesystem
//! mutation; its only failure mode is an unknown explicit seed type.

use std::path::Path;

use log::debug;

use crate::config::{Params, ResolvedConfig};
use crate::constants::DEFAULT_MIN_VERSION;
use crate::error::{Error, Result};
use crate::prompt::{Prompter, Question};
use crate::version;

/// Enumerates seed type names: non-dot-prefixed subdirectories of the
/// seeds root, in directory order.
pub fn list_seed_types<P: AsRef<Path>>(seeds_root: P) -> Result<Vec<String>> {
    let mut types = Vec::new();
    for entry in std::fs::read_dir(seeds_root.as_ref())? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Ok(name) = entry.file_name().into_string() {
            if !name.starts_with('.') {
                types.push(name);
            }
        }
    }
    types.sort();
    Ok(types)
}

/// Default project name: the final path segment of the target directory.
fn default_name(target_dir: &Path) -> String {
    target_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Resolves the scaffold configuration.
///
/// # Behavior
/// * Name comes from `params.name` when non-empty, otherwise a prompt
///   defaulting to the target directory's final path segment.
/// * A sole discovered seed type is selected without prompting; an explicit
///   `params.seed_type` must match a discovered name or the run fails;
///   otherwise the user picks from the discovered list.
/// * The minimum version starts at the built-in default and is bumped only
///   when the supplied version compares greater.
///
/// All questions are issued as one batched prompt request. An empty "name"
/// answer does not overwrite an already-set name.
///
/// # Errors
/// * `Error::TypeNotFound` if `params.seed_type` matches no discovered seed
pub fn resolve<P: AsRef<Path>>(
    params: &Params,
    target_dir: &Path,
    seeds_root: P,
    prompter: &dyn Prompter,
) -> Result<ResolvedConfig> {
    let mut questions = Vec::new();

    let mut name = String::new();
    match &params.name {
        Some(param_name) if !param_name.is_empty() => {
            name = param_name.clone();
        }
        _ => {
            questions.push(Question::input(
                "name",
                "Project name",
                &default_name(target_dir),
            ));
        }
    }

    let types = list_seed_types(&seeds_root)?;
    if types.is_empty() {
        return Err(Error::ConfigError(format!(
            "no seed templates found in {}",
            seeds_root.as_ref().display()
        )));
    }

    let mut seed_type = String::new();
    if types.len() == 1 {
        seed_type = types[0].clone();
    } else {
        match &params.seed_type {
            Some(param_type) => {
                if types.contains(param_type) {
                    seed_type = param_type.clone();
                } else {
                    return Err(Error::TypeNotFound { type_name: param_type.clone() });
                }
            }
            None => {
                questions.push(Question::select(
                    "type",
                    "Select the seed type",
                    types.clone(),
                ));
            }
        }
    }

    if !questions.is_empty() {
        let answers = prompter.ask(&questions)?;
        if let Some(answered_name) = answers.get("name") {
            if !answered_name.is_empty() {
                name = answered_name.clone();
            }
        }
        if let Some(answered_type) = answers.get("type") {
            seed_type = answered_type.clone();
        }
    }

    // An empty prompt answer with no prior name falls back to the default.
    if name.is_empty() {
        name = default_name(target_dir);
    }

    let min_version =
        version::bump(DEFAULT_MIN_VERSION, params.yyl_version.as_deref()).to_string();

    let resolved = ResolvedConfig { name, seed_type, min_version };
    debug!("Resolved scaffold configuration: {:?}", resolved);

    Ok(resolved)
}
