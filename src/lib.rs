//! Seedling is a project scaffolding tool built around bundled seed
//! templates. It resolves scaffold parameters (interactively where needed),
//! copies the selected seed into a target directory, renders embedded
//! `__data("key")` tokens and merges npm scripts into the target manifest.

/// Command-line interface module for the Seedling application
pub mod cli;

/// Caller parameters and the resolved scaffold configuration
pub mod config;

/// Common constants used throughout the application
pub mod constants;

/// File-map construction, adjustment and execution (the copy stage)
pub mod copier;

/// Error types and handling for the Seedling application
pub mod error;

/// Logger setup and the `Reporter` capability for user-facing notices
pub mod logger;

/// Target manifest (package.json) script merging
pub mod manifest;

/// Post-copy processing: token rendering and manifest merge
pub mod postprocess;

/// Pipeline orchestration
/// Composes the resolve, copy and post-process stages in order
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Literal token substitution for seed files
pub mod render;

/// Scaffold parameter resolution (name, seed type, minimum version)
pub mod resolver;

/// Dotted-numeric version comparison
pub mod version;
