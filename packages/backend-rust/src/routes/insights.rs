//! Behavioral analysis and dynamic status proxies.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

use crate::response::{AppError, AppJson};
use crate::routes::attendance::merge_object;
use crate::state::AppState;

/// Web-flow behavioral analysis has no local substitute; when the AI is down
/// the feature reports itself unavailable rather than erroring.
pub async fn analyze_web_flow(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Value>,
) -> Result<Response, AppError> {
    let response = match state.ai().analyze_web_flow(&payload).await {
        Ok(ai_response) => {
            let mut body = json!({ "success": true });
            merge_object(&mut body, ai_response);
            body["analysis_type"] = json!("behavioral");
            Json(body).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "web flow analysis unavailable");
            Json(json!({
                "success": false,
                "error": "Web flow analysis requires AI service",
                "message": "Enable the AI service for behavioral analysis features",
            }))
            .into_response()
        }
    };
    Ok(response)
}

/// Live insight feed; degrades to a static status object.
pub async fn dynamic_update(State(state): State<AppState>) -> Response {
    match state.ai().dynamic_update().await {
        Ok(ai_response) => Json(ai_response).into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "dynamic update falling back to static status");
            Json(json!({
                "success": true,
                "dynamic_update": {
                    "status": "System running",
                    "message": "Enable AI service for real-time insights",
                    "timestamp": Utc::now().to_rfc3339(),
                },
                "note": "Basic status provided. Connect AI service for dynamic updates.",
            }))
            .into_response()
        }
    }
}
