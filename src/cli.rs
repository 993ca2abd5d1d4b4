//! Command-line interface implementation for Seedling.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Seedling.
#[derive(Parser, Debug)]
#[command(author, version, about = "Seedling: project scaffolding from bundled seed templates", long_about = None)]
pub struct Args {
    /// Directory where the scaffolded project will be created
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Project name; prompted interactively when omitted
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed type; must match a discovered seed directory name
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub seed_type: Option<String>,

    /// Minimum yyl version; adopted only when greater than the built-in default
    #[arg(long = "yyl-version", value_name = "VERSION")]
    pub yyl_version: Option<String>,

    /// Suppress informational and progress notices
    #[arg(short, long)]
    pub silent: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the seeds root directory (defaults to the bundled seeds)
    #[arg(long, value_name = "DIR")]
    pub seeds: Option<PathBuf>,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
