//! Structured section detection and field-line rewriting.
//!
//! Operates on lines that survived the fence and transcript checks. A
//! trailing-colon line whose word is a known section alias becomes a bold
//! section marker; subsequent lines belong to the section until their
//! indentation drops below the baseline set by the first content line.

use crate::section::SectionKind;

/// Left-edge column that defines the scope of the active section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentBaseline {
    /// A header was just seen; the next content line fixes the baseline.
    Pending,
    /// Established baseline (0 when no section is active).
    Fixed(usize),
}

/// Section-tracking state threaded across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionState {
    /// The active section, if any.
    pub current: Option<SectionKind>,
    /// Indentation baseline for the active section.
    pub baseline: IndentBaseline,
}

impl Default for SectionState {
    fn default() -> Self {
        Self {
            current: None,
            baseline: IndentBaseline::Fixed(0),
        }
    }
}

/// Rewrites a single line, updating the section state.
///
/// Blank lines pass through untouched. Unknown headers and field lines
/// outside any section degrade to plain text (minus the indentation strip)
/// rather than failing.
pub fn rewrite_line(line: &str, state: &mut SectionState) -> String {
    if line.trim().is_empty() {
        return line.to_string();
    }

    if let Some(word) = line.trim_end().strip_suffix(':')
        && let Some(kind) = SectionKind::from_header(word)
    {
        state.current = Some(kind);
        state.baseline = IndentBaseline::Pending;
        // The marker carries its own trailing blank line.
        return format!("__{kind}__\n");
    }

    let indent = leading_whitespace_len(line);
    let strip = match state.baseline {
        IndentBaseline::Pending => {
            // First content line after a header fixes the baseline.
            state.baseline = IndentBaseline::Fixed(indent);
            indent
        }
        IndentBaseline::Fixed(baseline) => {
            if indent < baseline {
                // Indentation dropped below the baseline: the section is
                // over. Nested sub-sections are not supported.
                state.current = None;
                state.baseline = IndentBaseline::Fixed(0);
                0
            } else {
                baseline
            }
        }
    };
    let stripped: String = line.chars().skip(strip).collect();

    if let Some(kind) = state.current
        && let Some((name, description)) = split_field(&stripped)
    {
        return match kind {
            SectionKind::Arguments => format!("* __{name}__: {description}"),
            SectionKind::Attributes | SectionKind::Raises => {
                format!("* `{name}`: {description}")
            }
            SectionKind::Returns | SectionKind::Yields => format!("`{name}`:{description}"),
        };
    }
    stripped
}

fn leading_whitespace_len(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Splits a `name: description` field line at the first colon.
///
/// Returns `None` unless both halves are non-empty after trimming.
fn split_field(line: &str) -> Option<(&str, &str)> {
    let (name, description) = line.trim().split_once(':')?;
    let (name, description) = (name.trim(), description.trim());
    if name.is_empty() || description.is_empty() {
        return None;
    }
    Some((name, description))
}
