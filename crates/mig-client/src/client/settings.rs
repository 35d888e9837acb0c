use crate::RetryPolicy;

use std::time::Duration;

use mig_config::Config;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
const DEFAULT_TOTAL_PAGES_HEADER: &str = "X-Adapt-PageTotal";

/// Transport settings shared by every request of a [`crate::Client`]
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub request_timeout: Duration,
    /// Response header carrying the page count of list endpoints
    pub total_pages_header: String,
    pub retry: RetryPolicy,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            total_pages_header: String::from(DEFAULT_TOTAL_PAGES_HEADER),
            retry: RetryPolicy::default(),
        }
    }
}

impl From<&Config> for ClientSettings {
    fn from(config: &Config) -> Self {
        Self {
            request_timeout: Duration::from_secs(config.destination.request_timeout_secs),
            total_pages_header: config.destination.total_pages_header.clone(),
            retry: RetryPolicy::from(&config.retry),
        }
    }
}
