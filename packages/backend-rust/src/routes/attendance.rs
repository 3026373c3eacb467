//! Attendance projection, recommendation, and prediction endpoints.
//!
//! `/api/calculate-attendance` is the one endpoint that never touches the AI
//! service; the projection is closed-form and computed locally by
//! `attendance-core`. The other two forward to the AI service and degrade
//! per the two-tier policy: recommendations fall back to a static list,
//! prediction has no local substitute and reports itself unavailable.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use attendance_core::{AttendanceAnalysis, DEFAULT_TARGET_PERCENTAGE};

use crate::response::{AppError, AppJson};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateAttendanceDto {
    total_classes: Option<u32>,
    attended_classes: Option<u32>,
    /// Accepted for wire compatibility; not used by the projection.
    #[serde(default)]
    planned_absences: Option<u32>,
    #[serde(default)]
    preferences: Option<String>,
    target_percentage: Option<f64>,
}

#[derive(Debug, Serialize)]
struct CalculateAttendanceResponse {
    success: bool,
    attendance_analysis: AttendanceAnalysis,
    calculation_method: &'static str,
    timestamp: String,
}

pub async fn calculate(AppJson(dto): AppJson<CalculateAttendanceDto>) -> Result<Response, AppError> {
    let (Some(total_classes), Some(attended_classes)) = (dto.total_classes, dto.attended_classes)
    else {
        return Err(AppError::validation("Missing required fields"));
    };

    let target = dto.target_percentage.unwrap_or(DEFAULT_TARGET_PERCENTAGE);

    let analysis = attendance_core::calculate(total_classes, attended_classes, target)
        .map_err(|err| AppError::validation(err.to_string()))?;

    Ok(Json(CalculateAttendanceResponse {
        success: true,
        attendance_analysis: analysis,
        calculation_method: "enhanced",
        timestamp: Utc::now().to_rfc3339(),
    })
    .into_response())
}

/// Proxy recommendation generation; static generic advice when the AI is
/// down, still `success: true`.
pub async fn generate_recommendations(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Value>,
) -> Result<Response, AppError> {
    let response = match state.ai().generate_recommendations(&payload).await {
        Ok(ai_response) => {
            let mut body = json!({ "success": true });
            merge_object(&mut body, ai_response);
            body["enhanced_features"] = json!(["personalized", "dynamic", "predictive"]);
            Json(body).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "recommendation generation falling back");
            Json(json!({
                "success": true,
                "recommendations": static_recommendations(),
                "processing_method": "fallback",
                "note": "Basic recommendations provided. Enable AI service for advanced analysis.",
            }))
            .into_response()
        }
    };
    Ok(response)
}

/// Proxy attendance prediction. No local model exists, so the fallback is an
/// explicit `success: false` that callers treat as "feature unavailable".
pub async fn predict(
    State(state): State<AppState>,
    AppJson(payload): AppJson<Value>,
) -> Result<Response, AppError> {
    let response = match state.ai().predict_attendance(&payload).await {
        Ok(ai_response) => {
            let mut body = json!({ "success": true });
            merge_object(&mut body, ai_response);
            body["prediction_engine"] = json!("ai");
            Json(body).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "attendance prediction unavailable");
            Json(json!({
                "success": false,
                "error": "Attendance prediction requires AI service",
                "message": "Enable the AI service for predictive analysis capabilities",
            }))
            .into_response()
        }
    };
    Ok(response)
}

fn static_recommendations() -> Value {
    json!({
        "immediate_actions": [
            "Review current attendance status",
            "Plan next week's class schedule",
            "Set up attendance reminders",
        ],
        "long_term_strategy": [
            "Maintain consistent attendance pattern",
            "Monitor weekly progress",
            "Adjust schedule as needed",
        ],
        "note": "Enable AI service for personalized, intelligent recommendations",
    })
}

/// Overlay the AI response's top-level fields onto `target`, mirroring the
/// spread-style passthrough of the public API.
pub(crate) fn merge_object(target: &mut Value, source: Value) {
    if let (Some(target_map), Value::Object(source_map)) = (target.as_object_mut(), source) {
        for (key, value) in source_map {
            target_map.insert(key, value);
        }
    }
}
