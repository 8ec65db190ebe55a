//! Doctest transcript detection.
//!
//! Interactive-example blocks are recognized by `>>> ` / `... ` prompt
//! prefixes and rewritten into a python-tagged fenced code block. Doctest
//! expands tabs in its input to 8 spaces, so the rewriter does the same for
//! the leading whitespace run of every transcript line.

/// Sentinel doctest uses for an expected blank output line.
pub const BLANK_OUTPUT_TOKEN: &str = "<BLANKLINE>";

/// Fence line emitted when a transcript block opens.
pub(crate) const TRANSCRIPT_FENCE_OPEN: &str = "```python";

/// Fence line emitted when a transcript block closes.
pub(crate) const TRANSCRIPT_FENCE_CLOSE: &str = "```";

/// What the transcript stage decided for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptStep {
    /// Not transcript-related; the line continues down the pipeline.
    Continue,
    /// A prompt line opens a new block: emit the opening fence, then this
    /// expanded line.
    Open(String),
    /// Inside a block: emit this expanded line (further input or captured
    /// output).
    Emit(String),
    /// The blank-output sentinel: emit an empty line instead.
    BlankOutput,
    /// A blank line closed the block: emit the closing fence, then let the
    /// blank line continue down the pipeline.
    Close,
}

/// Advances the transcript state for a single line.
pub fn advance_transcript(line: &str, in_transcript: bool) -> TranscriptStep {
    let is_prompt = is_prompt_line(line);

    if !in_transcript {
        if is_prompt {
            return TranscriptStep::Open(expand_leading_tabs(line));
        }
        return TranscriptStep::Continue;
    }

    if is_prompt {
        return TranscriptStep::Emit(expand_leading_tabs(line));
    }
    if line.trim() == BLANK_OUTPUT_TOKEN {
        return TranscriptStep::BlankOutput;
    }
    if !line.trim().is_empty() {
        // Anything non-blank between prompts is captured output.
        return TranscriptStep::Emit(expand_leading_tabs(line));
    }
    TranscriptStep::Close
}

/// Checks for the 4-character prompt tokens after leading whitespace.
fn is_prompt_line(line: &str) -> bool {
    let content = line.trim_start();
    content.starts_with(">>> ") || content.starts_with("... ")
}

/// Replaces each tab in the leading whitespace run with 8 spaces.
///
/// Characters after the leading whitespace are left alone even if they
/// contain tabs, matching doctest's own handling.
fn expand_leading_tabs(line: &str) -> String {
    let content_start = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    let (whitespace, content) = line.split_at(content_start);

    let mut expanded = String::with_capacity(line.len());
    for ch in whitespace.chars() {
        if ch == '\t' {
            expanded.push_str("        ");
        } else {
            expanded.push(ch);
        }
    }
    expanded.push_str(content);
    expanded
}
