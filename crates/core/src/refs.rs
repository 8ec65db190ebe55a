//! Inline `#symbol` reference rewriting.
//!
//! Runs once over the fully assembled output. Tokens like `#foo.bar` or
//! `#foo.bar()` become inline code spans. This is a purely textual rewrite;
//! references are not resolved against a symbol table.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `#` after start-of-text, space, or tab, then word/dot characters and an
/// optional literal `()`.
static REF_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<prefix>^| |\t)#(?P<symbol>[\w.]+)(?P<parens>\(\))?")
        .expect("reference pattern is valid")
});

/// Rewrites `#symbol` references in `content` into inline code spans.
///
/// A trailing dot on a reference without parentheses is treated as sentence
/// punctuation and kept outside the code span: `#foo.` becomes `` `foo`. ``.
pub fn rewrite_references(content: &str) -> String {
    REF_PATTERN
        .replace_all(content, |caps: &Captures<'_>| {
            let prefix = caps.name("prefix").map_or("", |m| m.as_str());
            let parens = caps.name("parens").map_or("", |m| m.as_str());
            let mut symbol = caps.name("symbol").map_or("", |m| m.as_str());

            let mut trailing_dot = false;
            if parens.is_empty()
                && let Some(bare) = symbol.strip_suffix('.')
            {
                symbol = bare;
                trailing_dot = true;
            }

            let mut replacement = format!("{prefix}`{symbol}{parens}`");
            if trailing_dot {
                replacement.push('.');
            }
            replacement
        })
        .into_owned()
}
