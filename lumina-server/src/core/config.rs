//! Server configuration

/// Server configuration - all tunables of the reporting service
///
/// # Environment variables
///
/// Every entry can be overridden through the environment:
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | DAILY_TARGET_REVENUE | 17092000 | Expected revenue per calendar day |
/// | DATA_DIR | (embedded) | Directory holding units/pics/sales CSV files |
/// | NARRATIVE_API_URL | (none) | Text-generation endpoint for the AI analyst |
/// | NARRATIVE_API_KEY | (none) | API key for the endpoint |
/// | NARRATIVE_MODEL | gemini-3-pro-preview | Model name sent to the endpoint |
/// | LOG_LEVEL | info | Tracing level |
/// | LOG_DIR | (stdout) | Daily-rolling log file directory |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 DAILY_TARGET_REVENUE=20000000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Fixed daily revenue target; windowDays * this = target revenue
    pub daily_target_revenue: f64,
    /// Optional directory with replacement CSV tables
    pub data_dir: Option<String>,
    /// AI analyst endpoint; narrative requests degrade to a fallback
    /// message when unset or unreachable
    pub narrative_api_url: Option<String>,
    pub narrative_api_key: Option<String>,
    pub narrative_model: String,
    /// Tracing level
    pub log_level: String,
    /// Optional log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            daily_target_revenue: std::env::var("DAILY_TARGET_REVENUE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(17_092_000.0),
            data_dir: std::env::var("DATA_DIR").ok(),
            narrative_api_url: std::env::var("NARRATIVE_API_URL").ok(),
            narrative_api_key: std::env::var("NARRATIVE_API_KEY").ok(),
            narrative_model: std::env::var("NARRATIVE_MODEL")
                .unwrap_or_else(|_| "gemini-3-pro-preview".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Production environment check
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
