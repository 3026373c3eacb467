//! Multipart document upload.
//!
//! Validates the file before anything else touches it: extension and
//! declared content type must both match jpeg/jpg/png/pdf, and the payload
//! must fit the 10MB cap. Accepted files
//! are persisted under the upload directory with a timestamp + random suffix
//! (collisions are statistically ignored, not prevented) and then forwarded
//! to the AI service for document analysis. Files are never cleaned up.

use std::path::Path;

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use rand::Rng;
use serde_json::{json, Value};

use crate::response::AppError;
use crate::state::AppState;

const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "pdf"];

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut upload_type = "calendar".to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(format!("invalid multipart body: {err}")))?
    {
        match field.name() {
            Some("file") => {
                let original_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| AppError::bad_request("File field has no filename"))?;
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::bad_request(format!("failed to read file: {err}")))?;
                file = Some((original_name, content_type, bytes.to_vec()));
            }
            Some("uploadType") => {
                let value = field
                    .text()
                    .await
                    .map_err(|err| AppError::bad_request(format!("invalid uploadType: {err}")))?;
                if !value.trim().is_empty() {
                    upload_type = value;
                }
            }
            _ => {}
        }
    }

    let Some((original_name, content_type, bytes)) = file else {
        return Err(AppError::bad_request("No file uploaded"));
    };

    // Extension and declared content type must both pass.
    let extension = file_extension(&original_name)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| AppError::bad_request("Only images and PDFs are allowed"))?;
    if !mime_allowed(content_type.as_deref()) {
        return Err(AppError::bad_request("Only images and PDFs are allowed"));
    }

    let config = state.config();
    if bytes.len() as u64 > config.max_upload_bytes {
        return Err(AppError::payload_too_large("File exceeds the 10MB limit"));
    }

    let stored_name = stored_filename(&extension);
    let stored_path = config.upload_dir.join(&stored_name);

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|err| AppError::internal(format!("upload directory unavailable: {err}")))?;
    tokio::fs::write(&stored_path, &bytes)
        .await
        .map_err(|err| AppError::internal(format!("failed to persist upload: {err}")))?;

    tracing::info!(file = %stored_name, upload_type = %upload_type, "processing uploaded document");

    let body = match state
        .ai()
        .process_document(&stored_name, bytes, &upload_type)
        .await
    {
        Ok(ai_analysis) => upload_body(
            &stored_name,
            &original_name,
            &upload_type,
            Some(ai_analysis),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "AI service unavailable, upload stored without analysis");
            upload_body(&stored_name, &original_name, &upload_type, None)
        }
    };

    Ok(Json(body).into_response())
}

fn upload_body(
    stored_name: &str,
    original_name: &str,
    upload_type: &str,
    ai_analysis: Option<Value>,
) -> Value {
    match ai_analysis {
        Some(analysis) => json!({
            "success": true,
            "message": format!("{upload_type} uploaded and processed with AI"),
            "filename": stored_name,
            "originalName": original_name,
            "uploadType": upload_type,
            "ai_analysis": analysis,
            "processing_method": "ai-vision",
        }),
        None => json!({
            "success": true,
            "message": format!("{upload_type} uploaded successfully (AI processing unavailable)"),
            "filename": stored_name,
            "originalName": original_name,
            "uploadType": upload_type,
            "processing_method": "fallback",
            "note": "Document uploaded successfully. Enable AI service for advanced analysis.",
        }),
    }
}

/// Whether the declared content type names one of the accepted formats.
/// Substring match, so `image/jpeg`, `image/png`, and `application/pdf` all
/// pass while `application/octet-stream` does not.
fn mime_allowed(content_type: Option<&str>) -> bool {
    content_type
        .map(|ct| {
            let ct = ct.to_lowercase();
            ALLOWED_EXTENSIONS.iter().any(|kw| ct.contains(kw))
        })
        .unwrap_or(false)
}

/// Lowercased extension of the client-supplied filename.
fn file_extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// `file-<millis>-<random><.ext>`, disambiguated by clock plus random suffix.
fn stored_filename(extension: &str) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!(
        "file-{}-{}.{}",
        Utc::now().timestamp_millis(),
        suffix,
        extension
    )
}
