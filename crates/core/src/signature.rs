//! Signature escaping and title formatting.
//!
//! A rendered function signature is not Markdown but will be read as
//! Markdown, so emphasis metacharacters must be escaped before it can be
//! used as a document title.

use crate::config::PreprocessorConfig;

/// Escapes Markdown emphasis metacharacters (`\`, `*`, `_`) in a signature.
///
/// Backslashes are escaped first so inserted escapes are not re-escaped.
pub fn escape_signature(signature: &str) -> String {
    signature
        .replace('\\', r"\\")
        .replace('*', r"\*")
        .replace('_', r"\_")
}

/// Formats a document title from a rendered signature.
///
/// When `header_anchor_enabled` is set, a `{#symbol}` heading-id suffix is
/// appended, derived from the escaped signature up to its first `(`.
pub fn format_title(signature: &str, config: &PreprocessorConfig) -> String {
    let escaped = escape_signature(signature);
    if config.header_anchor_enabled {
        let symbol = escaped.split('(').next().unwrap_or("");
        format!("{escaped}  {{#{symbol}}}")
    } else {
        escaped
    }
}
