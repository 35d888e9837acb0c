use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DestinationConfig, LegacyConfig, LoggingConfig, MigrateConfig, PackageConfig, RetryConfig,
};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub migrate: MigrateConfig,
    pub legacy: LegacyConfig,
    pub destination: DestinationConfig,
    pub retry: RetryConfig,
    pub package: PackageConfig,
    pub logging: LoggingConfig,
    /// Extra legacy role name → destination role short name pre-selections
    pub role_hints: BTreeMap<String, String>,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for MIG_CONFIG_DIR env var, else use ./.migrate/
    /// 2. Load config.toml if it exists, else use defaults
    /// 3. Apply MIG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: MIG_CONFIG_DIR env var > ./.migrate/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.migrate.validate()?;
        self.legacy.validate()?;
        self.destination.validate()?;
        self.retry.validate()?;
        self.package.validate()?;

        if self
            .role_hints
            .iter()
            .any(|(source, destination)| source.is_empty() || destination.is_empty())
        {
            return Err(ConfigError::config(
                "role_hints entries cannot have empty names",
            ));
        }

        Ok(())
    }

    /// Root directory holding run directories for a legacy installation.
    pub fn migrate_root(&self, source_path: &Path) -> PathBuf {
        source_path.join(&self.migrate.dir_name)
    }

    /// Directory of collection dumps for a legacy installation.
    pub fn store_dir(&self, source_path: &Path) -> PathBuf {
        source_path.join(&self.legacy.store_dir)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  migrate: dir={}, super_admin_role={}",
            self.migrate.dir_name, self.migrate.super_admin_role
        );
        info!(
            "  legacy: store={}, server={}, startup_timeout={}s",
            self.legacy.store_dir,
            self.legacy
                .server_command
                .as_deref()
                .unwrap_or("(already running)"),
            self.legacy.startup_timeout_secs
        );
        info!(
            "  destination: url={}, token={}, timeout={}s, user_concurrency={}",
            self.destination.api_url.as_deref().unwrap_or("(prompt)"),
            if self.destination.auth_token.is_some() {
                "set"
            } else {
                "(prompt)"
            },
            self.destination.request_timeout_secs,
            self.destination.user_concurrency
        );
        info!(
            "  retry: attempts={}, initial={}ms, max={}s, backoff={}x",
            self.retry.max_attempts,
            self.retry.initial_delay_ms,
            self.retry.max_delay_secs,
            self.retry.backoff_multiplier
        );
        info!(
            "  package: denylist=[{}], keep_unpacked={}",
            self.package.plugin_denylist.join(", "),
            self.package.keep_unpacked
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Migrate
        Self::apply_env_string("MIG_MIGRATE_DIR_NAME", &mut self.migrate.dir_name);
        Self::apply_env_string("MIG_SUPER_ADMIN_ROLE", &mut self.migrate.super_admin_role);

        // Legacy
        Self::apply_env_string("MIG_LEGACY_STORE_DIR", &mut self.legacy.store_dir);
        Self::apply_env_option_string(
            "MIG_LEGACY_SERVER_COMMAND",
            &mut self.legacy.server_command,
        );
        Self::apply_env_string("MIG_LEGACY_READY_URL", &mut self.legacy.ready_url);
        Self::apply_env_string("MIG_LEGACY_EXPORT_URL", &mut self.legacy.export_url);
        Self::apply_env_parse(
            "MIG_LEGACY_STARTUP_TIMEOUT_SECS",
            &mut self.legacy.startup_timeout_secs,
        );

        // Destination
        Self::apply_env_option_string("MIG_API_URL", &mut self.destination.api_url);
        Self::apply_env_option_string("MIG_AUTH_TOKEN", &mut self.destination.auth_token);
        Self::apply_env_parse(
            "MIG_REQUEST_TIMEOUT_SECS",
            &mut self.destination.request_timeout_secs,
        );
        Self::apply_env_parse(
            "MIG_USER_CONCURRENCY",
            &mut self.destination.user_concurrency,
        );
        Self::apply_env_string(
            "MIG_TOTAL_PAGES_HEADER",
            &mut self.destination.total_pages_header,
        );

        // Retry
        Self::apply_env_parse("MIG_RETRY_MAX_ATTEMPTS", &mut self.retry.max_attempts);
        Self::apply_env_parse(
            "MIG_RETRY_INITIAL_DELAY_MS",
            &mut self.retry.initial_delay_ms,
        );
        Self::apply_env_parse("MIG_RETRY_MAX_DELAY_SECS", &mut self.retry.max_delay_secs);
        Self::apply_env_parse(
            "MIG_RETRY_BACKOFF_MULTIPLIER",
            &mut self.retry.backoff_multiplier,
        );
        Self::apply_env_bool("MIG_RETRY_JITTER", &mut self.retry.jitter);

        // Package
        Self::apply_env_bool("MIG_KEEP_UNPACKED", &mut self.package.keep_unpacked);
        if let Ok(val) = std::env::var("MIG_PLUGIN_DENYLIST") {
            self.package.plugin_denylist = val
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from)
                .collect();
        }

        // Logging
        Self::apply_env_parse("MIG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("MIG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("MIG_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
