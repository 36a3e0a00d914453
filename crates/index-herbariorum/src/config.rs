use std::env;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://sweetgum.nybg.org/science/api/v1";
pub const DEFAULT_USER_AGENT: &str = "index-herbariorum-rs/0.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration, fixed for the lifetime of a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ClientConfig {
    /// Parse configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url =
            lookup("INDEX_HERBARIORUM_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = lookup("INDEX_HERBARIORUM_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let user_agent = lookup("INDEX_HERBARIORUM_USER_AGENT")
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        Self {
            base_url,
            timeout,
            user_agent,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}
