//! Drives the subject function over parsed cases and reports outcomes.
//!
//! The driver visits every case in section order, invokes the subject with
//! the case's arguments, and compares the result to the expected value with
//! exact string equality. A mismatch is recorded, not thrown: one failing
//! case never prevents the rest of the run. There are no retries.

use serde::Serialize;

use crate::fixture::{Case, INPUT_SEPARATOR};
use crate::sections::SectionGroups;

/// The external string-merging function under test.
///
/// Implemented for any closure taking the ordered argument slice, so test
/// code can pass a plain `fn` or lambda as the subject.
pub trait Subject {
    fn merge(&self, inputs: &[String]) -> String;
}

impl<F> Subject for F
where
    F: Fn(&[String]) -> String,
{
    fn merge(&self, inputs: &[String]) -> String {
        self(inputs)
    }
}

/// The result of running a single case.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CaseOutcome {
    Pass {
        section: String,
        line: usize,
    },
    Fail {
        section: String,
        line: usize,
        /// The case's input tokens joined with `" | "`, as written in the
        /// fixture.
        input: String,
        expected: String,
        actual: String,
    },
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Pass { .. })
    }
}

/// Configuration for run reporting.
pub struct HarnessConfig {
    pub use_colors: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
        }
    }
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

impl HarnessConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

/// Runs one case against the subject.
pub fn run_case<S: Subject + ?Sized>(subject: &S, case: &Case) -> CaseOutcome {
    let actual = subject.merge(&case.input);
    if actual == case.expected {
        CaseOutcome::Pass {
            section: case.section.clone(),
            line: case.line,
        }
    } else {
        CaseOutcome::Fail {
            section: case.section.clone(),
            line: case.line,
            input: case.input.join(INPUT_SEPARATOR),
            expected: case.expected.clone(),
            actual,
        }
    }
}

/// Runs every case in every group, in order, collecting all outcomes.
pub fn run_cases<S: Subject + ?Sized>(subject: &S, groups: &SectionGroups) -> Vec<CaseOutcome> {
    groups
        .iter()
        .flat_map(|(_, cases)| cases.iter().map(|case| run_case(subject, case)))
        .collect()
}

/// Partition outcomes into (passed, failed) counts.
pub fn partition(outcomes: &[CaseOutcome]) -> (usize, usize) {
    let passed = outcomes.iter().filter(|o| o.is_pass()).count();
    (passed, outcomes.len() - passed)
}

/// Print per-case results and a summary with colored output.
pub fn report(outcomes: &[CaseOutcome], config: &HarnessConfig) {
    for outcome in outcomes {
        match outcome {
            CaseOutcome::Pass { section, line } => {
                println!(
                    "{}: {} (line {})",
                    config.colorize("PASS", GREEN),
                    section,
                    line
                );
            }
            CaseOutcome::Fail {
                section,
                line,
                input,
                expected,
                actual,
            } => {
                let fail = config.colorize("FAIL", RED);
                eprintln!("{}: {} (line {})", fail, section, line);
                eprintln!("  Input:    {}", input);
                eprintln!("  Expected: {}", expected);
                eprintln!("  Actual:   {}", actual);
            }
        }
    }

    let (passed, failed) = partition(outcomes);
    println!(
        "\nConformance summary: total {}, {} {}, {} {}",
        outcomes.len(),
        config.colorize("passed", GREEN),
        passed,
        config.colorize("failed", RED),
        failed,
    );
}
