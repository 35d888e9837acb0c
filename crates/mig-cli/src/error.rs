use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] mig_config::ConfigError),

    #[error("{0}")]
    Migrate(#[from] mig_sync::MigrateError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Migrate(e) if e.is_cancelled())
    }
}

impl From<mig_legacy::LegacyError> for CliError {
    #[track_caller]
    fn from(err: mig_legacy::LegacyError) -> Self {
        Self::Migrate(mig_sync::MigrateError::from(err))
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
