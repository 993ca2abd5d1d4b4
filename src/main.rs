//! Seedling's main application entry point.
//! Parses command-line arguments, configures logging and hands control to
//! the pipeline orchestrator.

use seedling::{
    cli::get_args,
    error::default_error_handler,
    logger::init_logger,
    processor,
    prompt::DialoguerPrompter,
};

fn main() {
    let args = get_args();

    init_logger(args.verbose);

    let prompter = DialoguerPrompter::new();
    if let Err(err) = processor::run(args, &prompter) {
        default_error_handler(err);
    }
}
