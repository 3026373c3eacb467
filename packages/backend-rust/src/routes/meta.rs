//! Service descriptor and aggregate health.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct DescriptorResponse {
    message: &'static str,
    version: &'static str,
    features: [&'static str; 4],
}

pub async fn descriptor() -> Response {
    Json(DescriptorResponse {
        message: "AI Attendance Management API",
        version: env!("CARGO_PKG_VERSION"),
        features: [
            "document-processing",
            "dynamic-analysis",
            "web-automation",
            "predictive-insights",
        ],
    })
    .into_response()
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    services: ServicesStatus,
    uptime: u64,
    timestamp: String,
}

#[derive(Debug, Serialize)]
struct ServicesStatus {
    backend: &'static str,
    ai_service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    ai_model: Option<String>,
}

/// Own status plus a bounded reachability probe of the AI service. The AI
/// being down degrades the report to "partial", never to an error status.
pub async fn health(State(state): State<AppState>) -> Response {
    let response = match state.ai().health().await {
        Ok(ai_health) => HealthResponse {
            status: "healthy",
            message: "Backend server is running",
            services: ServicesStatus {
                backend: "online",
                ai_service: str_field(&ai_health, "status").unwrap_or_else(|| "online".to_string()),
                ai_model: str_field(&ai_health, "model"),
            },
            uptime: state.uptime_seconds(),
            timestamp: Utc::now().to_rfc3339(),
        },
        Err(err) => {
            tracing::warn!(error = %err, "AI service health probe failed");
            HealthResponse {
                status: "partial",
                message: "Backend running, AI service unavailable",
                services: ServicesStatus {
                    backend: "online",
                    ai_service: "offline".to_string(),
                    ai_model: None,
                },
                uptime: state.uptime_seconds(),
                timestamp: Utc::now().to_rfc3339(),
            }
        }
    };

    Json(response).into_response()
}

fn str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}
