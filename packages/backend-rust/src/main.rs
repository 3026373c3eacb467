use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use attendance_backend_rust::config::Config;
use attendance_backend_rust::profile::StudentProfile;
use attendance_backend_rust::routes;
use attendance_backend_rust::services::ai_client::AiClient;
use attendance_backend_rust::state::AppState;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = tokio::fs::create_dir_all(&config.upload_dir).await {
        tracing::error!(error = %err, dir = %config.upload_dir.display(), "failed to create upload directory");
        return;
    }

    let ai = AiClient::http(&config);
    let profile = StudentProfile::load(config.student_profile_path.as_deref());

    let addr = config.bind_addr();
    let ai_service_url = config.ai_service_url.clone();
    let state = AppState::new(Arc::new(config), ai, Arc::new(profile));

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!(%addr, %ai_service_url, "attendance backend listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind listener failed");

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    if let Err(e) = server.await {
        tracing::error!(error = %e, "server error");
    }

    tracing::info!("HTTP server stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
        sigterm.recv().await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
