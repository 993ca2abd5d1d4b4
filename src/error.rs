//! Error handling for the Seedling application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Seedling operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// An explicitly requested seed type does not exist among the
    /// discovered seed directories
    #[error("seed type does not exist: {type_name}.")]
    TypeNotFound { type_name: String },

    /// Represents errors that occur while serializing structured data
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// Represents errors that occur during configuration resolution
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
