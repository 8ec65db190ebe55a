//! Code fence tracking for verbatim passthrough.
//!
//! Docstrings may contain literal fenced code blocks. Every line from the
//! opening marker to the closing marker (inclusive) is copied to the output
//! untouched; the fence check runs before any other per-line processing.

/// Outcome of the fence check for one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceOutcome {
    /// Fence flag to carry into the next line.
    pub in_fence: bool,
    /// Whether this line is fully handled (append verbatim, stop the
    /// pipeline for this line).
    pub handled: bool,
}

/// Advances the fence flag for a single line.
///
/// A line whose raw text starts with a triple backtick toggles the flag.
/// Marker lines themselves and every line inside the fence are handled
/// verbatim, including lines that would otherwise look like section
/// headers or transcript prompts. An unmatched opening marker leaves the
/// remainder of the document fenced; that is deliberate degradation, not
/// an error.
pub fn advance_fence(line: &str, in_fence: bool) -> FenceOutcome {
    let is_marker = line.starts_with("```");
    let next = if is_marker { !in_fence } else { in_fence };
    FenceOutcome {
        in_fence: next,
        handled: is_marker || next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_marker_enters_fence_and_is_handled() {
        let outcome = advance_fence("```python", false);
        assert!(outcome.in_fence);
        assert!(outcome.handled);
    }

    #[test]
    fn lines_inside_fence_are_handled() {
        let outcome = advance_fence("Args:", true);
        assert!(outcome.in_fence);
        assert!(outcome.handled);
    }

    #[test]
    fn closing_marker_exits_fence_but_is_still_handled() {
        let outcome = advance_fence("```", true);
        assert!(!outcome.in_fence);
        assert!(outcome.handled);
    }

    #[test]
    fn plain_line_outside_fence_continues() {
        let outcome = advance_fence("some text", false);
        assert!(!outcome.in_fence);
        assert!(!outcome.handled);
    }

    #[test]
    fn indented_marker_does_not_toggle() {
        // Only markers at column 0 count; indented backticks are content.
        let outcome = advance_fence("    ```", false);
        assert!(!outcome.in_fence);
        assert!(!outcome.handled);
    }
}
