mod attendance;
mod chat;
mod insights;
mod meta;
mod preferences;
mod upload;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;

use crate::response::json_error;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    // Body limit leaves headroom above the 10MB file cap for multipart
    // framing; the upload handler enforces the exact per-file limit.
    let body_limit = state.config().max_upload_bytes as usize + 64 * 1024;

    Router::new()
        .route("/", get(meta::descriptor))
        .route("/health", get(meta::health))
        .route("/api/upload", post(upload::upload))
        .route("/api/preferences", post(preferences::analyze))
        .route("/api/calculate-attendance", post(attendance::calculate))
        .route(
            "/api/generate-recommendations",
            post(attendance::generate_recommendations),
        )
        .route("/api/predict-attendance", post(attendance::predict))
        .route("/api/analyze-web-flow", post(insights::analyze_web_flow))
        .route("/api/dynamic-update", get(insights::dynamic_update))
        .route("/api/chat", post(chat::chat))
        .fallback(fallback_handler)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

async fn fallback_handler() -> Response {
    json_error(StatusCode::NOT_FOUND, "NOT_FOUND", "route not found").into_response()
}
