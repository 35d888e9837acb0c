use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_EXPORT_URL, DEFAULT_READY_URL,
    DEFAULT_STARTUP_TIMEOUT_SECS, DEFAULT_STORE_DIR, MAX_STARTUP_TIMEOUT_SECS,
    MIN_STARTUP_TIMEOUT_SECS,
};

use serde::Deserialize;

/// How to reach the legacy installation's data and embedded server
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    /// Directory of collection dumps, relative to the legacy installation
    pub store_dir: String,
    /// Command starting the legacy server; when unset the server must already be running
    pub server_command: Option<String>,
    pub server_args: Vec<String>,
    /// Polled until it answers 2xx
    pub ready_url: String,
    /// Course id is appended as the last path segment
    pub export_url: String,
    pub startup_timeout_secs: u64,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            store_dir: String::from(DEFAULT_STORE_DIR),
            server_command: None,
            server_args: Vec::new(),
            ready_url: String::from(DEFAULT_READY_URL),
            export_url: String::from(DEFAULT_EXPORT_URL),
            startup_timeout_secs: DEFAULT_STARTUP_TIMEOUT_SECS,
        }
    }
}

impl LegacyConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.startup_timeout_secs < MIN_STARTUP_TIMEOUT_SECS
            || self.startup_timeout_secs > MAX_STARTUP_TIMEOUT_SECS
        {
            return Err(ConfigError::legacy(format!(
                "legacy.startup_timeout_secs must be {}-{}, got {}",
                MIN_STARTUP_TIMEOUT_SECS, MAX_STARTUP_TIMEOUT_SECS, self.startup_timeout_secs
            )));
        }

        for (name, url) in [("ready_url", &self.ready_url), ("export_url", &self.export_url)] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::legacy(format!(
                    "legacy.{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }

        Ok(())
    }
}
