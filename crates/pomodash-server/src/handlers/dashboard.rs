//! Embedded dashboard page.

use axum::response::Html;

/// Serves the dashboard that polls `/api/pomodoro`.
///
/// `GET /`
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
