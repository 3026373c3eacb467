//! Free-text preference analysis with keyword fallback.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use attendance_core::classify;

use crate::response::{AppError, AppJson};
use crate::routes::attendance::merge_object;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreferencesDto {
    preferences: Option<String>,
}

pub async fn analyze(
    State(state): State<AppState>,
    AppJson(dto): AppJson<PreferencesDto>,
) -> Result<Response, AppError> {
    let preferences = dto
        .preferences
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::validation("No preferences provided"))?;

    match state.ai().analyze_preferences(&preferences).await {
        Ok(ai_response) => {
            let mut body = json!({
                "success": true,
                "message": "Preferences analyzed with AI",
            });
            merge_object(&mut body, ai_response);
            body["enhanced_with"] = json!("ai");
            Ok(Json(body).into_response())
        }
        Err(err) => {
            tracing::warn!(error = %err, "preference analysis falling back to keyword classifier");
            let analysis = classify(&preferences);
            Ok(Json(json!({
                "success": true,
                "message": "Preferences processed (basic analysis)",
                "analyzedPreferences": analysis,
                "originalPreferences": preferences,
                "processing_method": "fallback",
                "note": "Basic analysis used. Enable AI service for advanced insights.",
            }))
            .into_response())
        }
    }
}
