use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_TOTAL_PAGES_HEADER,
    DEFAULT_USER_CONCURRENCY, MAX_REQUEST_TIMEOUT_SECS, MAX_USER_CONCURRENCY,
    MIN_REQUEST_TIMEOUT_SECS, MIN_USER_CONCURRENCY,
};

use serde::Deserialize;

/// Destination API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DestinationConfig {
    /// Prompted for (and then persisted in the import manifest) when unset
    pub api_url: Option<String>,
    pub auth_token: Option<String>,
    pub request_timeout_secs: u64,
    /// Maximum user creations in flight at once
    pub user_concurrency: usize,
    /// Response header carrying the page count of list endpoints
    pub total_pages_header: String,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            auth_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_concurrency: DEFAULT_USER_CONCURRENCY,
            total_pages_header: String::from(DEFAULT_TOTAL_PAGES_HEADER),
        }
    }
}

impl DestinationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::destination(format!(
                "destination.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.user_concurrency < MIN_USER_CONCURRENCY
            || self.user_concurrency > MAX_USER_CONCURRENCY
        {
            return Err(ConfigError::destination(format!(
                "destination.user_concurrency must be {}-{}, got {}",
                MIN_USER_CONCURRENCY, MAX_USER_CONCURRENCY, self.user_concurrency
            )));
        }

        if let Some(ref url) = self.api_url
            && !url.starts_with("http://")
            && !url.starts_with("https://")
        {
            return Err(ConfigError::destination(format!(
                "destination.api_url must be an http(s) URL, got '{url}'"
            )));
        }

        if self.total_pages_header.trim().is_empty() {
            return Err(ConfigError::destination(
                "destination.total_pages_header cannot be empty",
            ));
        }

        Ok(())
    }
}
