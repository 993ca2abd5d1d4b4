//! Logger setup and the `Reporter` capability.
//! `init_logger` configures the process-wide log facade once; user-facing
//! progress notices go through a `Reporter` value passed explicitly into
//! the stages that emit them, parameterized by the silent flag at
//! construction instead of mutating global logger state mid-run.

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();
}

/// Emits user-facing notices. Info and success notices are suppressed when
/// silent; warnings always get through.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    silent: bool,
}

impl Reporter {
    pub fn new(silent: bool) -> Self {
        Self { silent }
    }

    pub fn info(&self, message: &str) {
        if !self.silent {
            println!("{}", message);
        }
    }

    pub fn success(&self, message: &str) {
        if !self.silent {
            println!("{}", message);
        }
    }

    pub fn warn(&self, message: &str) {
        eprintln!("warning: {}", message);
    }
}
