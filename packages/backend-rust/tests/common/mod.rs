use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tempfile::TempDir;

use attendance_backend_rust::config::Config;
use attendance_backend_rust::profile::StudentProfile;
use attendance_backend_rust::routes;
use attendance_backend_rust::services::ai_client::AiClient;
use attendance_backend_rust::state::AppState;

/// App wired to the given AI client, with uploads directed at a temp dir.
/// Keep the returned `TempDir` alive for the duration of the test.
pub fn create_test_app(ai: AiClient) -> (Router, TempDir) {
    let upload_dir = tempfile::tempdir().expect("create temp upload dir");

    let config = Config {
        host: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        log_level: "warn".to_string(),
        ai_service_url: "http://localhost:59999".to_string(),
        ai_timeout: Duration::from_millis(200),
        health_timeout: Duration::from_millis(200),
        upload_dir: upload_dir.path().to_path_buf(),
        max_upload_bytes: 64 * 1024,
        student_profile_path: None,
    };

    let state = AppState::new(
        Arc::new(config),
        ai,
        Arc::new(StudentProfile::sample()),
    );

    (routes::router(state), upload_dir)
}

/// Minimal multipart body with a single file part and an uploadType part.
pub fn multipart_upload_body(
    boundary: &str,
    file_name: &str,
    content_type: &str,
    content: &[u8],
    upload_type: &str,
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(
        format!(
            "\r\n--{boundary}\r\nContent-Disposition: form-data; name=\"uploadType\"\r\n\r\n{upload_type}\r\n--{boundary}--\r\n"
        )
        .as_bytes(),
    );
    body
}
