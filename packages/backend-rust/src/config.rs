use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_AI_SERVICE_URL: &str = "http://localhost:5001";
const DEFAULT_AI_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_HEALTH_TIMEOUT_MS: u64 = 5_000;
const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub ai_service_url: String,
    /// Upper bound for every forwarded AI call.
    pub ai_timeout: Duration,
    /// Tighter bound used only for the /health reachability probe.
    pub health_timeout: Duration,
    pub upload_dir: PathBuf,
    pub max_upload_bytes: u64,
    /// Optional JSON file overriding the built-in demo student profile.
    pub student_profile_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(5000);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let ai_service_url = std::env::var("AI_SERVICE_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_AI_SERVICE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let ai_timeout = Duration::from_millis(
            std::env::var("AI_TIMEOUT_MS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(DEFAULT_AI_TIMEOUT_MS),
        );

        let upload_dir = std::env::var("UPLOAD_DIR")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("uploads"));

        let student_profile_path = std::env::var("STUDENT_PROFILE_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Self {
            host,
            port,
            log_level,
            ai_service_url,
            ai_timeout,
            health_timeout: Duration::from_millis(DEFAULT_HEALTH_TIMEOUT_MS),
            upload_dir,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            student_profile_path,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
