//! The per-document line processor.
//!
//! Each input line runs through three stages in a fixed order: the fence
//! check (which can short-circuit everything else), the transcript check
//! (which can also short-circuit), and the structured section rewriter.
//! Once all lines are collected, the reference pass runs exactly once over
//! the joined output.

use crate::config::PreprocessorConfig;
use crate::fence::advance_fence;
use crate::refs::rewrite_references;
use crate::rewrite::{SectionState, rewrite_line};
use crate::signature::format_title;
use crate::transcript::{
    TRANSCRIPT_FENCE_CLOSE, TRANSCRIPT_FENCE_OPEN, TranscriptStep, advance_transcript,
};

/// Output of preprocessing one docstring section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedSection {
    /// Escaped signature title, when a signature was supplied.
    pub title: Option<String>,
    /// The rewritten Markdown body.
    pub body: String,
}

/// Mutable state threaded through the line loop. Created fresh per call.
#[derive(Debug, Default)]
struct ProcessingState {
    in_fence: bool,
    in_transcript: bool,
    section: SectionState,
    lines: Vec<String>,
}

/// Converts Google-style docstring sections into Markdown.
///
/// The processor holds only configuration; every call to
/// [`preprocess_section`](Self::preprocess_section) builds its own state, so
/// one processor can be shared across threads.
#[derive(Debug, Clone)]
pub struct Preprocessor<'a> {
    config: &'a PreprocessorConfig,
}

impl<'a> Preprocessor<'a> {
    /// Creates a processor with the given configuration.
    pub fn new(config: &'a PreprocessorConfig) -> Self {
        Self { config }
    }

    /// Preprocesses the body of one docstring section.
    ///
    /// Never fails: malformed input (unknown headers, unmatched fences, odd
    /// indentation) degrades to pass-through text.
    pub fn preprocess_section(&self, content: &str, signature: Option<&str>) -> ProcessedSection {
        let mut state = ProcessingState::default();

        for line in content.split('\n') {
            let fence = advance_fence(line, state.in_fence);
            state.in_fence = fence.in_fence;
            if fence.handled {
                state.lines.push(line.to_string());
                continue;
            }

            match advance_transcript(line, state.in_transcript) {
                TranscriptStep::Open(expanded) => {
                    state.in_transcript = true;
                    state.lines.push(TRANSCRIPT_FENCE_OPEN.to_string());
                    state.lines.push(expanded);
                    continue;
                }
                TranscriptStep::Emit(expanded) => {
                    state.lines.push(expanded);
                    continue;
                }
                TranscriptStep::BlankOutput => {
                    state.lines.push(String::new());
                    continue;
                }
                TranscriptStep::Close => {
                    // The blank line that closed the block still runs
                    // through the section rewriter below.
                    state.in_transcript = false;
                    state.lines.push(TRANSCRIPT_FENCE_CLOSE.to_string());
                }
                TranscriptStep::Continue => {}
            }

            let rewritten = rewrite_line(line, &mut state.section);
            state.lines.push(rewritten);
        }

        if state.in_fence {
            log::debug!("docstring section ended inside an unclosed code fence");
        }
        if state.in_transcript {
            // Known gap: no closing fence is emitted for a transcript that
            // runs to the end of the input.
            log::debug!("docstring section ended inside an open transcript");
        }

        let body = rewrite_references(&state.lines.join("\n"));
        let title = signature.map(|sig| format_title(sig, self.config));
        ProcessedSection { title, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preprocess(content: &str) -> String {
        let config = PreprocessorConfig::default();
        Preprocessor::new(&config)
            .preprocess_section(content, None)
            .body
    }

    #[test]
    fn fenced_lines_pass_through_verbatim() {
        let input = "```\nArgs:\n    x: y\n```\nafter";
        assert_eq!(preprocess(input), input);
    }

    #[test]
    fn unterminated_fence_swallows_the_rest() {
        let input = "before\n```\nReturns:\n    int: x";
        assert_eq!(preprocess(input), input);
    }

    #[test]
    fn section_header_is_rendered_exactly_once() {
        let body = preprocess("Args:\n    x: the input value");
        assert_eq!(body.matches("__Arguments__").count(), 1);
        assert!(!body.contains("Args:"));
        assert!(body.contains("* __x__: the input value"));
    }

    #[test]
    fn transcript_becomes_tagged_fenced_block() {
        let body = preprocess(">>> x = 1\n>>> x\n1\n\n");
        assert_eq!(body, "```python\n>>> x = 1\n>>> x\n1\n```\n\n");
    }

    #[test]
    fn transcript_blankline_token_becomes_empty_output_line() {
        let body = preprocess(">>> print('a\\n\\nb')\na\n<BLANKLINE>\nb\n\ndone");
        assert_eq!(body, "```python\n>>> print('a\\n\\nb')\na\n\nb\n```\n\ndone");
    }

    #[test]
    fn transcript_left_open_at_end_of_input_keeps_fence_unclosed() {
        // Pins the known gap: no trailing blank line, no closing fence.
        let body = preprocess(">>> 1 + 1\n2");
        assert_eq!(body, "```python\n>>> 1 + 1\n2");
    }

    #[test]
    fn references_are_rewritten_after_assembly() {
        let body = preprocess("Args:\n    x: passed to #helper()");
        assert_eq!(body, "__Arguments__\n\n* __x__: passed to `helper()`");
    }

    #[test]
    fn indentation_drop_ends_section_before_plain_text() {
        let body = preprocess("Args:\n    x: the input\nOutside: not a field");
        assert!(body.contains("* __x__: the input"));
        assert!(body.contains("Outside: not a field"));
        assert!(!body.contains("* __Outside__"));
    }

    #[test]
    fn empty_input_yields_empty_body() {
        assert_eq!(preprocess(""), "");
    }

    #[test]
    fn title_is_formatted_when_signature_present() {
        let config = PreprocessorConfig {
            header_anchor_enabled: true,
        };
        let result =
            Preprocessor::new(&config).preprocess_section("Body text.", Some("my_func(a, b)"));
        assert_eq!(result.title.as_deref(), Some(r"my\_func(a, b)  {#my\_func}"));
        assert_eq!(result.body, "Body text.");
    }

    #[test]
    fn already_rewritten_lines_survive_a_second_pass() {
        // Soft round-trip property: bold markers and bullets are not
        // re-mangled when fed back in.
        let once = preprocess("Args:\n    x: the input value");
        assert_eq!(preprocess(&once), once);
    }
}
