//! Client configuration

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "STOCKTAKE_API_URL";

/// Default backend URL when the environment variable is not set
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Configuration for connecting to the inventory backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Read the backend URL from `STOCKTAKE_API_URL`, falling back to the
    /// localhost default
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    /// Set the request timeout in seconds
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
