//! Client for the external generative-AI service.
//!
//! Every forwarded operation is bounded by the configured timeout and fails
//! fast: there are no retries, because the route handlers degrade to a local
//! fallback (or an explicit "feature unavailable" body) on the first error.
//!
//! The `Mock` variant substitutes canned responses so the per-endpoint
//! degrade policy is testable without a live service.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("AI service unavailable: {0}")]
    Unavailable(&'static str),
}

/// AI service handle. `Http` talks to the configured base URL; `Mock` serves
/// a fixed outcome and is the substitution point used by tests.
pub enum AiClient {
    Http(HttpAi),
    Mock(MockAi),
}

impl AiClient {
    pub fn http(config: &Config) -> Self {
        AiClient::Http(HttpAi::new(
            config.ai_service_url.clone(),
            config.ai_timeout,
            config.health_timeout,
        ))
    }

    /// Mock that answers every operation with `response`.
    pub fn mock_up(response: Value) -> Self {
        AiClient::Mock(MockAi {
            response: Some(response),
        })
    }

    /// Mock that fails every operation, driving handlers onto their fallback
    /// path.
    pub fn mock_down() -> Self {
        AiClient::Mock(MockAi { response: None })
    }

    /// Document OCR/extraction. The file is re-sent as multipart form data
    /// the same way it arrived.
    pub async fn process_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        upload_type: &str,
    ) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => http.process_document(file_name, bytes, upload_type).await,
            AiClient::Mock(mock) => mock.respond(),
        }
    }

    pub async fn analyze_preferences(&self, preferences: &str) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => {
                http.post_json(
                    "/process-preferences",
                    &serde_json::json!({ "preferences": preferences }),
                )
                .await
            }
            AiClient::Mock(mock) => mock.respond(),
        }
    }

    pub async fn generate_recommendations(&self, payload: &Value) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => http.post_json("/generate-recommendations", payload).await,
            AiClient::Mock(mock) => mock.respond(),
        }
    }

    pub async fn analyze_web_flow(&self, payload: &Value) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => http.post_json("/analyze-web-flow", payload).await,
            AiClient::Mock(mock) => mock.respond(),
        }
    }

    pub async fn predict_attendance(&self, payload: &Value) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => http.post_json("/predict-attendance", payload).await,
            AiClient::Mock(mock) => mock.respond(),
        }
    }

    pub async fn dynamic_update(&self) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => http.get_json("/dynamic-update", false).await,
            AiClient::Mock(mock) => mock.respond(),
        }
    }

    pub async fn chat(&self, payload: &Value) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => http.post_json("/chat", payload).await,
            AiClient::Mock(mock) => mock.respond(),
        }
    }

    /// Reachability probe for /health, bounded tighter than normal calls.
    pub async fn health(&self) -> Result<Value, AiError> {
        match self {
            AiClient::Http(http) => http.get_json("/health", true).await,
            AiClient::Mock(mock) => mock.respond(),
        }
    }
}

pub struct HttpAi {
    base_url: String,
    health_timeout: Duration,
    client: reqwest::Client,
}

impl HttpAi {
    fn new(base_url: String, timeout: Duration, health_timeout: Duration) -> Self {
        // Startup-time construction. A client without the timeout would
        // break the bounded-call invariant, so refuse to start instead.
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("build AI service HTTP client");

        Self {
            base_url,
            health_timeout,
            client,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    async fn post_json(&self, endpoint: &str, payload: &Value) -> Result<Value, AiError> {
        let response = self.client.post(self.url(endpoint)).json(payload).send().await?;
        Self::decode(endpoint, response).await
    }

    async fn get_json(&self, endpoint: &str, use_health_timeout: bool) -> Result<Value, AiError> {
        let mut request = self.client.get(self.url(endpoint));
        if use_health_timeout {
            request = request.timeout(self.health_timeout);
        }
        let response = request.send().await?;
        Self::decode(endpoint, response).await
    }

    async fn process_document(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        upload_type: &str,
    ) -> Result<Value, AiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("type", upload_type.to_string());

        let response = self
            .client
            .post(self.url("/process-document"))
            .multipart(form)
            .send()
            .await?;
        Self::decode("/process-document", response).await
    }

    async fn decode(endpoint: &str, response: reqwest::Response) -> Result<Value, AiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(endpoint, %status, "AI service returned error status");
            return Err(AiError::HttpStatus { status, body });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

pub struct MockAi {
    response: Option<Value>,
}

impl MockAi {
    fn respond(&self) -> Result<Value, AiError> {
        self.response
            .clone()
            .ok_or(AiError::Unavailable("mock configured as down"))
    }
}
