//! Binary entrypoint for the pomodash HTTP server.
//!
//! Reads configuration from environment variables:
//! - `POMODASH_PORT`: server listen port (default: "8007")
//! - `POMODASH_EMACSCLIENT`: evaluator binary (default: "emacsclient")

use pomodash_server::router::build_router;
use pomodash_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("POMODASH_PORT").unwrap_or_else(|_| "8007".to_string());
    let binary =
        std::env::var("POMODASH_EMACSCLIENT").unwrap_or_else(|_| "emacsclient".to_string());

    let state = AppState::new(&binary);
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("pomodash server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
