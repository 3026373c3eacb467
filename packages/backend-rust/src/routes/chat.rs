//! Chat assistant endpoint.
//!
//! The inbound message is enriched with the injected student profile before
//! being forwarded, so the remote model answers against concrete attendance
//! data. When the AI is unreachable the reply degrades to a narrative built
//! from the same profile.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::response::{AppError, AppJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatDto {
    message: Option<String>,
    #[serde(default)]
    context: Option<Value>,
}

pub async fn chat(
    State(state): State<AppState>,
    AppJson(dto): AppJson<ChatDto>,
) -> Result<Response, AppError> {
    let message = dto
        .message
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::validation("Message is required"))?;

    let profile = state.profile();

    let mut context = dto.context.unwrap_or_else(|| json!({}));
    if let Some(ctx) = context.as_object_mut() {
        ctx.insert("student_data".to_string(), json!(*profile));
        ctx.insert("university".to_string(), json!(profile.university));
        ctx.insert("semester".to_string(), json!(profile.semester));
        ctx.insert("program".to_string(), json!(profile.program));
        ctx.insert("academic_year".to_string(), json!(profile.academic_year));
        ctx.insert("current_date".to_string(), json!(Utc::now().to_rfc3339()));
    }

    let payload = json!({
        "message": message,
        "context": context,
        "timestamp": Utc::now().to_rfc3339(),
    });

    let body = match state.ai().chat(&payload).await {
        Ok(ai_response) => json!({
            "success": true,
            "response": ai_response.get("response").cloned().unwrap_or(Value::Null),
            "context_used": ai_response.get("context_used").cloned().unwrap_or(json!(true)),
            "suggestions": ai_response
                .get("suggestions")
                .cloned()
                .unwrap_or_else(|| json!(profile.suggestions())),
            "student_data": *profile,
            "timestamp": Utc::now().to_rfc3339(),
            "processing_method": "ai",
        }),
        Err(err) => {
            tracing::warn!(error = %err, "chat falling back to profile narrative");
            json!({
                "success": true,
                "response": profile.fallback_narrative(),
                "context_used": false,
                "suggestions": profile.fallback_suggestions(),
                "processing_method": "fallback",
                "note": "AI service temporarily unavailable - using student data fallback",
            })
        }
    };

    Ok(Json(body).into_response())
}
