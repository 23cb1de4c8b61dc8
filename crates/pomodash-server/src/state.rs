//! Shared application state: the injected evaluator capability.
//!
//! Requests share nothing but the evaluator handle; every snapshot is
//! built from scratch, so there is no lock to take.

use std::sync::Arc;

use pomodash_core::evaluator::{EmacsClient, Evaluator};

/// Shared state for the HTTP server.
///
/// The evaluator sits behind `Arc<dyn Evaluator>` so tests can inject a
/// fake in place of the emacsclient-backed implementation.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Arc<dyn Evaluator>,
}

impl AppState {
    /// State backed by the given emacsclient binary.
    pub fn new(binary: &str) -> Self {
        Self::with_evaluator(Arc::new(EmacsClient::new(binary)))
    }

    /// State backed by an arbitrary evaluator (used by tests).
    pub fn with_evaluator(evaluator: Arc<dyn Evaluator>) -> Self {
        AppState { evaluator }
    }
}
