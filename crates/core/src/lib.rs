#![deny(missing_docs)]
//! mdgloss core: Google-style docstring preprocessing into Markdown.
//!
//! The entry point is [`Preprocessor`], which takes the body of one
//! docstring section (plus an optional rendered signature) and rewrites it
//! line by line: fenced code blocks pass through untouched, doctest-style
//! transcripts become fenced code blocks, recognized sections (`Args:`,
//! `Returns:`, ...) become Markdown headers with formatted field lists, and
//! a final pass turns `#symbol` references into inline code spans.

/// Configuration bundle and JSON loading.
pub mod config;
/// Code fence tracking for verbatim passthrough.
pub mod fence;
/// The per-document line processor.
pub mod preprocess;
/// Inline `#symbol` reference rewriting.
pub mod refs;
/// Structured section detection and field-line rewriting.
pub mod rewrite;
/// Section kinds and the header alias table.
pub mod section;
/// Signature escaping and title formatting.
pub mod signature;
/// Doctest transcript detection.
pub mod transcript;

pub use config::{ConfigError, PreprocessorConfig};
pub use fence::{FenceOutcome, advance_fence};
pub use preprocess::{Preprocessor, ProcessedSection};
pub use refs::rewrite_references;
pub use rewrite::{IndentBaseline, SectionState, rewrite_line};
pub use section::SectionKind;
pub use signature::{escape_signature, format_title};
pub use transcript::{BLANK_OUTPUT_TOKEN, TranscriptStep, advance_transcript};
