use std::sync::Arc;
use std::time::{Instant, SystemTime};

use crate::config::Config;
use crate::profile::StudentProfile;
use crate::services::ai_client::AiClient;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    config: Arc<Config>,
    ai: Arc<AiClient>,
    profile: Arc<StudentProfile>,
}

impl AppState {
    pub fn new(config: Arc<Config>, ai: AiClient, profile: Arc<StudentProfile>) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            config,
            ai: Arc::new(ai),
            profile,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn config(&self) -> Arc<Config> {
        Arc::clone(&self.config)
    }

    pub fn ai(&self) -> Arc<AiClient> {
        Arc::clone(&self.ai)
    }

    pub fn profile(&self) -> Arc<StudentProfile> {
        Arc::clone(&self.profile)
    }
}
