//! Success/failure classification for bake invocations.
//!
//! buildx is known to write benign warnings to stderr on successful builds,
//! and some failure modes exit zero after printing an error. Neither signal
//! alone is trustworthy, so failure is declared only on the conjunction of
//! a non-zero exit code and non-empty stderr.

use std::process::Output;

/// Captured result of one process invocation. Immutable after capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl ExecutionResult {
    /// Capture from a finished `std::process::Output`.
    ///
    /// A missing exit code (killed by signal) is treated as non-zero.
    pub fn from_output(output: &Output) -> Self {
        ExecutionResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}

/// Classified outcome of an execute-mode bake run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure {
        /// Trailing non-empty stderr line, trimmed.
        message: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Classify one execution result.
///
/// Failure iff stderr is non-empty AND the exit code is non-zero; every
/// other combination is success. The failure message is the last non-empty
/// line of stderr so the user sees the actual error, not the whole stream.
pub fn classify(result: &ExecutionResult) -> Outcome {
    if !result.stderr.is_empty() && result.exit_code != 0 {
        let message = result
            .stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("")
            .to_string();
        Outcome::Failure { message }
    } else {
        Outcome::Success
    }
}
