//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use crate::storage::JsonFileStore;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default notification poll interval in seconds
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Client configuration for connecting to the CandleBliss backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8000/api")
    pub base_url: String,

    /// Bearer token of the signed-in user
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Notification poll interval in seconds
    pub poll_interval: u64,

    /// File holding persisted client state (watermarks, cart badge, history)
    pub storage_path: PathBuf,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            poll_interval: DEFAULT_POLL_INTERVAL_SECS,
            storage_path: PathBuf::from(".candlebliss/state.json"),
        }
    }

    /// Read configuration from `BLISS_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("BLISS_API_URL").unwrap_or(defaults.base_url),
            token: std::env::var("BLISS_API_TOKEN")
                .ok()
                .filter(|t| !t.is_empty()),
            timeout: std::env::var("BLISS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.timeout),
            poll_interval: std::env::var("BLISS_POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.poll_interval),
            storage_path: std::env::var("BLISS_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.storage_path),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the notification poll interval
    pub fn with_poll_interval(mut self, seconds: u64) -> Self {
        self.poll_interval = seconds;
        self
    }

    /// Set the persisted state file
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Poll period, never below one second
    pub fn poll_period(&self) -> Duration {
        Duration::from_secs(self.poll_interval.max(1))
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }

    /// Open the persisted state file
    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::open(&self.storage_path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000/api")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, 10);
        assert_eq!(config.poll_period(), Duration::from_secs(60));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::new("https://api.candlebliss.vn")
            .with_token("tkn")
            .with_timeout(3)
            .with_poll_interval(0)
            .with_storage_path("/tmp/bliss.json");
        assert_eq!(config.token.as_deref(), Some("tkn"));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.poll_period(), Duration::from_secs(1));
        assert_eq!(config.storage_path, PathBuf::from("/tmp/bliss.json"));
    }
}
