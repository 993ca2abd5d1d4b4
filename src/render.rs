//! Literal token substitution for seed files.
//! Tokens have the form `__data("key")` (single or double quotes); every
//! occurrence is replaced with the matching `ResolvedConfig` field. No
//! expression evaluation, no escaping. A token whose key is not a resolved
//! field is left literal, so rendering is idempotent.

use crate::config::ResolvedConfig;

/// Renders every known token in `content` from the resolved configuration.
pub fn render_tokens(content: &str, config: &ResolvedConfig) -> String {
    let mut rendered = content.to_string();
    for (key, value) in config.token_fields() {
        for token in [format!("__data(\"{}\")", key), format!("__data('{}')", key)] {
            rendered = rendered.replace(&token, &value);
        }
    }
    rendered
}
