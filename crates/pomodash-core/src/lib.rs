//! Value retrieval and aggregation for the org-pomodoro dashboard.
//!
//! Queries a running Emacs session through `emacsclient -e`, normalizes
//! the printed replies, and folds several independently fallible queries
//! into a single [`Snapshot`].

pub mod error;
pub mod evaluator;
pub mod snapshot;

// Re-export commonly used types
pub use error::EvalError;
pub use evaluator::{EmacsClient, Evaluator, NIL_TOKEN, TRUE_TOKEN};
pub use snapshot::{DebugReport, RawReplies, Snapshot};
