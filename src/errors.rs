//! Unified error type for the harness.
//!
//! Structural errors are fatal to a parse: a malformed fixture yields no
//! cases at all, never a partial list. Assertion mismatches are not errors —
//! the driver records them as [`CaseOutcome::Fail`](crate::driver::CaseOutcome)
//! values so the remaining cases still run.

use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source file context shared by every structural error from one parse.
pub type SourceArc = Arc<NamedSource<String>>;

/// All failure modes of fixture loading and parsing.
#[derive(Error, Diagnostic, Debug)]
pub enum SpecError {
    #[error("Failed to read spec file '{path}'")]
    #[diagnostic(code(mergespec::io::read))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: found '=>' without input")]
    #[diagnostic(
        code(mergespec::parse::orphan_output),
        help("every '=>' line must be preceded by an input line")
    )]
    OrphanOutput {
        line: usize,
        #[source_code]
        src: SourceArc,
        #[label("output with no pending input")]
        span: SourceSpan,
    },

    #[error("Line {found_line}: found input without '=>' for previous input at line {pending_line}")]
    #[diagnostic(
        code(mergespec::parse::unmatched_input),
        help("each input line must be answered by exactly one '=>' line before the next input")
    )]
    UnmatchedInput {
        pending_line: usize,
        found_line: usize,
        #[source_code]
        src: SourceArc,
        #[label("this input never received its output")]
        span: SourceSpan,
    },

    #[error("End of file: found input at line {line} without '=>'")]
    #[diagnostic(code(mergespec::parse::dangling_input))]
    DanglingInput {
        line: usize,
        #[source_code]
        src: SourceArc,
        #[label("unmatched input")]
        span: SourceSpan,
    },
}

impl SpecError {
    /// The 1-based line number governing this failure, where one applies.
    ///
    /// For [`SpecError::UnmatchedInput`] this is the pending input's line,
    /// not the line where the violation was detected.
    pub fn line(&self) -> Option<usize> {
        match self {
            SpecError::Io { .. } => None,
            SpecError::OrphanOutput { line, .. } | SpecError::DanglingInput { line, .. } => {
                Some(*line)
            }
            SpecError::UnmatchedInput { pending_line, .. } => Some(*pending_line),
        }
    }
}

/// Prints a [`SpecError`] with full miette diagnostics.
///
/// Use this for user-facing error display in CLI contexts.
pub fn print_error(error: SpecError) {
    let report = miette::Report::new(error);
    eprintln!("{report:?}");
}
