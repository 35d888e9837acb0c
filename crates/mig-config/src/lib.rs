mod config;
mod destination_config;
mod error;
mod legacy_config;
mod log_level;
mod logging_config;
mod migrate_config;
mod package_config;
mod retry_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use destination_config::DestinationConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use legacy_config::LegacyConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use migrate_config::MigrateConfig;
pub use package_config::PackageConfig;
pub use retry_config::RetryConfig;

const CONFIG_DIR_ENV: &str = "MIG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".migrate";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_MIGRATE_DIR_NAME: &str = "migrate";
const DEFAULT_SUPER_ADMIN_ROLE: &str = "Super Admin";

const DEFAULT_STORE_DIR: &str = "dump";
const DEFAULT_READY_URL: &str = "http://127.0.0.1:5000/";
const DEFAULT_EXPORT_URL: &str = "http://127.0.0.1:5000/api/migrate/export";
const DEFAULT_STARTUP_TIMEOUT_SECS: u64 = 120;
const MIN_STARTUP_TIMEOUT_SECS: u64 = 1;
const MAX_STARTUP_TIMEOUT_SECS: u64 = 3600;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 3600;
const DEFAULT_USER_CONCURRENCY: usize = 8;
const MIN_USER_CONCURRENCY: usize = 1;
const MAX_USER_CONCURRENCY: usize = 64;
const DEFAULT_TOTAL_PAGES_HEADER: &str = "X-Adapt-PageTotal";

const DEFAULT_PLUGIN_DENYLIST: [&str; 3] = [
    "adapt-contrib-xapi",
    "adapt-contrib-spoor",
    "adapt-contrib-languagePicker",
];

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
