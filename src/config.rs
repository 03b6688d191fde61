use std::env;
use std::time::Duration;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(160);

/// Runtime configuration, loaded once at startup and injected into the
/// handler state. A missing URL or token is not an error here; the resulting
/// upstream failure surfaces per request instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub flow_url: String,
    pub api_token: String,
    pub upstream_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            flow_url: env::var("FLOW_API_URL").unwrap_or_default(),
            api_token: env::var("FLOW_API_TOKEN").unwrap_or_default(),
            upstream_timeout: UPSTREAM_TIMEOUT,
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("Invalid PORT"),
        }
    }
}
