//! Pipeline orchestration.
//! The scaffold run is a strict three-stage sequence with no branching
//! back: resolve, copy, post-process. A failure while resolving aborts
//! before any filesystem mutation; copy and render faults propagate; only
//! the manifest-merge sub-step downgrades its failure to a warning.

use std::path::PathBuf;

use log::debug;

use crate::cli::Args;
use crate::config::Params;
use crate::constants::SEEDS_DIR;
use crate::copier::{adjust_file_map, build_file_map, execute_file_map};
use crate::error::{Error, Result};
use crate::logger::Reporter;
use crate::postprocess::post_process;
use crate::prompt::Prompter;
use crate::resolver::resolve;

/// Pipeline stages, entered strictly in declaration order.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Stage {
    Resolving,
    Copying,
    PostProcessing,
    Done,
}

/// Locates the seeds root: an explicit override wins, then the directory
/// shipped next to the executable, then `seeds` in the working directory.
pub fn locate_seeds_root(overridden: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = overridden {
        return Ok(root);
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let bundled = dir.join(SEEDS_DIR);
            if bundled.is_dir() {
                return Ok(bundled);
            }
        }
    }
    let local = PathBuf::from(SEEDS_DIR);
    if local.is_dir() {
        return Ok(local);
    }
    Err(Error::ConfigError("seeds root not found".to_string()))
}

/// Runs the whole scaffold pipeline for the given arguments.
pub fn run(args: Args, prompter: &dyn Prompter) -> Result<()> {
    let reporter = Reporter::new(args.silent);
    let seeds_root = locate_seeds_root(args.seeds.clone())?;
    let params = Params::from(&args);

    let mut stage = Stage::Resolving;
    debug!("entering stage {:?}", stage);
    let resolved = resolve(&params, &args.target_dir, &seeds_root, prompter)?;
    let seed_dir = seeds_root.join(&resolved.seed_type);

    stage = Stage::Copying;
    debug!("entering stage {:?}", stage);
    let mut file_map = build_file_map(&seed_dir, &args.target_dir)?;
    adjust_file_map(&mut file_map, &seed_dir, &args.target_dir);
    execute_file_map(&file_map)?;

    stage = Stage::PostProcessing;
    debug!("entering stage {:?}", stage);
    post_process(&resolved, &args.target_dir, &reporter)?;

    stage = Stage::Done;
    debug!("entering stage {:?}", stage);
    reporter.success(&format!(
        "project '{}' scaffolded in {}",
        resolved.name,
        args.target_dir.display()
    ));
    Ok(())
}
