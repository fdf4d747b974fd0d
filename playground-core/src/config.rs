use std::time::Duration;

/// Default execution service endpoint
pub const DEFAULT_BASE_URL: &str = "http://localhost:3300";

/// Connection settings for the execution service
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Base URL of the execution service
    pub base_url: String,

    /// Upper bound on each request; `None` leaves requests unbounded and a
    /// run settles only when the service responds or the connection drops
    pub request_timeout: Option<Duration>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl RunnerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}
