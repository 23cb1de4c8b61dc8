//! Router assembly for the pomodash HTTP API.
//!
//! [`build_router`] wires the dashboard and API routes with CORS and
//! tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// CORS is permissive (the dashboard may be opened from another origin
/// or straight from disk). TraceLayer provides request-level logging
/// via tracing.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::index))
        .route("/api/pomodoro", get(handlers::pomodoro::get_snapshot))
        .route("/api/debug", get(handlers::pomodoro::get_debug))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
