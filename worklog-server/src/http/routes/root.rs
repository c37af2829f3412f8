//! Root greeting endpoint

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Welcome response
#[derive(Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// GET /
async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Worklog API",
    })
}

/// Root routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(welcome))
}
