//! Fixture loading and the line-oriented case parser.
//!
//! A fixture file encodes input/expected-output pairs for the subject
//! function, grouped into sections:
//!
//! ```text
//! # ========
//! # Basics
//! foo bar
//! => foo bar
//! ```
//!
//! A `# ==...` line is a cosmetic section delimiter; a `# `-prefixed line
//! directly below a delimiter names the section. Every other `#` line and
//! every blank line is ignored. An input line carries one or more arguments
//! separated by `" | "`; the `=>` line that follows carries the expected
//! return value. The pairing is strict — a missing or extra `=>` aborts the
//! whole parse with a structural error naming the offending line.

use std::path::Path;
use std::sync::Arc;

use miette::{NamedSource, SourceSpan};
use serde::Serialize;

use crate::errors::{SourceArc, SpecError};

/// Separator between arguments on an input line.
pub const INPUT_SEPARATOR: &str = " | ";

/// Marker opening an expected-output line.
pub const OUTPUT_MARKER: &str = "=>";

/// Section for cases appearing before the first section header.
pub const DEFAULT_SECTION: &str = "Uncategorized";

const DELIMITER_PREFIX: &str = "# ==";
const SECTION_PREFIX: &str = "# ";
const COMMENT_PREFIX: &str = "#";

/// One parsed fixture record.
///
/// Cases are constructed once during the parse pass and are immutable
/// thereafter; `line` is the 1-based number of the input line, kept for
/// diagnostics when the case fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Case {
    pub section: String,
    pub input: Vec<String>,
    pub expected: String,
    pub line: usize,
}

/// A loaded fixture file: its text plus the named source handed to every
/// structural error so miette can render the offending line in context.
#[derive(Debug, Clone)]
pub struct SpecFile {
    name: String,
    content: String,
    src: SourceArc,
}

impl SpecFile {
    /// Reads a fixture file from disk. Decoding aside, the content is
    /// untouched; splitting into lines is the parser's job.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SpecError> {
        let name = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| SpecError::Io {
            path: name.clone(),
            source,
        })?;
        Ok(Self::from_source(name, content))
    }

    /// Builds a fixture from an in-memory string, for tests and embedding.
    pub fn from_source(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let content = content.into();
        let src = Arc::new(NamedSource::new(name.clone(), content.clone()));
        Self { name, content, src }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn source(&self) -> SourceArc {
        self.src.clone()
    }

    /// Parses this fixture into its ordered case list. See [`parse`].
    pub fn parse(&self) -> Result<Vec<Case>, SpecError> {
        parse(self)
    }
}

/// Scanner state: either between cases, or holding an input that still
/// awaits its `=>` line. Local to each [`parse`] call, so distinct fixtures
/// can be parsed concurrently.
enum ParseState {
    AwaitingInput,
    HaveInput {
        input: Vec<String>,
        line: usize,
        span: SourceSpan,
    },
}

/// Converts a fixture's lines into an ordered sequence of [`Case`]s.
///
/// Single linear pass. The first grammar violation aborts the parse — a
/// malformed fixture is a defect in the file, and misattributing cases
/// would be worse than failing loudly.
pub fn parse(spec: &SpecFile) -> Result<Vec<Case>, SpecError> {
    let mut cases = Vec::new();
    let mut section = DEFAULT_SECTION.to_string();
    let mut state = ParseState::AwaitingInput;
    let mut prev_was_delimiter = false;
    let mut offset = 0usize;

    for (idx, raw) in spec.content().split('\n').enumerate() {
        let line_num = idx + 1;
        let line_span = SourceSpan::from((offset, raw.len()));
        offset += raw.len() + 1;

        let after_delimiter = prev_was_delimiter;
        prev_was_delimiter = raw.starts_with(DELIMITER_PREFIX);

        // Section delimiters are purely cosmetic.
        if prev_was_delimiter {
            continue;
        }

        // The comment directly below a delimiter names the section.
        if after_delimiter && raw.starts_with(SECTION_PREFIX) {
            section = raw[SECTION_PREFIX.len()..].trim().to_string();
            continue;
        }

        if raw.starts_with(COMMENT_PREFIX) || raw.trim().is_empty() {
            continue;
        }

        if let Some(rest) = raw.strip_prefix(OUTPUT_MARKER) {
            match std::mem::replace(&mut state, ParseState::AwaitingInput) {
                ParseState::AwaitingInput => {
                    return Err(SpecError::OrphanOutput {
                        line: line_num,
                        src: spec.source(),
                        span: line_span,
                    });
                }
                ParseState::HaveInput { input, line, .. } => {
                    cases.push(Case {
                        section: section.clone(),
                        input,
                        expected: rest.trim().to_string(),
                        line,
                    });
                }
            }
            continue;
        }

        // Anything else is an input line.
        match state {
            ParseState::HaveInput { line, span, .. } => {
                return Err(SpecError::UnmatchedInput {
                    pending_line: line,
                    found_line: line_num,
                    src: spec.source(),
                    span,
                });
            }
            ParseState::AwaitingInput => {
                // The whole line is trimmed, but the split tokens are used
                // exactly as produced; tokens are never re-trimmed.
                let input = raw
                    .trim()
                    .split(INPUT_SEPARATOR)
                    .map(str::to_string)
                    .collect();
                state = ParseState::HaveInput {
                    input,
                    line: line_num,
                    span: line_span,
                };
            }
        }
    }

    if let ParseState::HaveInput { line, span, .. } = state {
        return Err(SpecError::DanglingInput {
            line,
            src: spec.source(),
            span,
        });
    }

    Ok(cases)
}
