//! Error types for evaluator invocation.
//!
//! Uses `thiserror` for structured, matchable error variants. These
//! errors are recovered field-locally by the snapshot aggregator and
//! never cross the HTTP boundary.

use thiserror::Error;

/// Errors produced while invoking the external evaluator.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The evaluator binary could not be spawned at all.
    #[error("failed to run evaluator: {0}")]
    Spawn(#[from] std::io::Error),

    /// The evaluator exited with a non-zero status (no running session,
    /// connection refused, or an evaluation error inside the editor).
    #[error("evaluator exited with status {code:?}: {stderr}")]
    NonZeroExit {
        code: Option<i32>,
        stderr: String,
    },

    /// The evaluator exited successfully but printed nothing.
    #[error("evaluator produced no output")]
    EmptyOutput,
}
