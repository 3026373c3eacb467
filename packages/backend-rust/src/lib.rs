#![allow(dead_code)]

pub mod config;
pub mod profile;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;

use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::Config;
use crate::profile::StudentProfile;
use crate::services::ai_client::AiClient;
use crate::state::AppState;

pub async fn create_app() -> axum::Router {
    let config = Config::from_env();
    let ai = AiClient::http(&config);
    let profile = StudentProfile::load(config.student_profile_path.as_deref());
    let state = AppState::new(Arc::new(config), ai, Arc::new(profile));

    routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
