//! Caller parameters and the resolved scaffold configuration.
//! `Params` carries whatever the caller supplied on the command line;
//! `ResolvedConfig` is the immutable result of the resolve stage and the
//! single source of truth for token rendering.

use serde::Serialize;

use crate::cli::Args;

/// Caller-supplied scaffold parameters. Every field is optional; the
/// resolver fills the gaps interactively or from defaults.
#[derive(Debug, Default, Clone)]
pub struct Params {
    pub name: Option<String>,
    pub seed_type: Option<String>,
    pub yyl_version: Option<String>,
}

impl From<&Args> for Params {
    fn from(args: &Args) -> Self {
        Self {
            name: args.name.clone(),
            seed_type: args.seed_type.clone(),
            yyl_version: args.yyl_version.clone(),
        }
    }
}

/// The final merged set of scaffold parameters. Built once by the resolver
/// and threaded as a read-only value through the remaining stages; serde
/// field names double as the token keys seen in seed files.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedConfig {
    pub name: String,
    #[serde(rename = "type")]
    pub seed_type: String,
    #[serde(rename = "yylVersion")]
    pub min_version: String,
}

impl ResolvedConfig {
    /// Token key/value pairs in serialized form, for rendering.
    pub fn token_fields(&self) -> Vec<(String, String)> {
        // ResolvedConfig is a flat struct of strings, so serialization
        // cannot fail and every value is a JSON string.
        let value = serde_json::to_value(self).unwrap_or_default();
        match value {
            serde_json::Value::Object(map) => map
                .into_iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
                .collect(),
            _ => Vec::new(),
        }
    }
}
