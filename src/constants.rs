//! Common constants used throughout the Seedling application.

/// Directory (next to the executable, or in the working directory) that
/// holds one subdirectory per seed type.
pub const SEEDS_DIR: &str = "seeds";

/// Built-in minimum yyl version; bumped upward only, never downgraded.
pub const DEFAULT_MIN_VERSION: &str = "3.10.2";

/// Ignore-file sources inside a seed. The leading dot is added at the
/// destination so the files survive npm packaging of the seed itself.
pub const IGNORE_FILES: [(&str, &str); 2] =
    [("gitignore", ".gitignore"), ("npmignore", ".npmignore")];

/// Copied files that get their tokens rendered in place after the copy.
pub const RENDER_FILES: [&str; 1] = ["yyl.config.js"];

/// npm scripts injected into the target manifest. Entries already present
/// in the manifest win on key collision.
pub const MANIFEST_SCRIPTS: [(&str, &str); 2] =
    [("yyl:d", "yyl watch --silent"), ("yyl:0", "yyl all --silent")];

/// Target manifest file name.
pub const MANIFEST_FILE: &str = "package.json";
