//! Snapshot and debug endpoints.

use axum::extract::State;
use axum::Json;
use pomodash_core::snapshot::{self, DebugReport, Snapshot};

use crate::state::AppState;

/// Returns the current timer snapshot.
///
/// `GET /api/pomodoro`
///
/// Always 200: field-level failures degrade to defaults instead of
/// surfacing as HTTP errors, so the polling dashboard never sees a gap.
pub async fn get_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    Json(snapshot::read_snapshot(state.evaluator.as_ref()))
}

/// Returns raw evaluator replies next to the parsed snapshot, for
/// operator troubleshooting.
///
/// `GET /api/debug`
pub async fn get_debug(State(state): State<AppState>) -> Json<DebugReport> {
    Json(snapshot::read_debug(state.evaluator.as_ref()))
}
