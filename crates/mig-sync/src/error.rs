use std::panic::Location;

use error_location::ErrorLocation;
use mig_client::ClientError;
use mig_config::ConfigError;
use mig_core::{CoreError, FailureKind};
use mig_legacy::LegacyError;
use mig_package::PackageError;
use thiserror::Error;

/// Failure taxonomy shared by both pipelines.
///
/// Setup failures of any kind abort a run. Per-unit failures are recorded
/// against the unit in its manifest and the run continues.
#[derive(Error, Debug)]
pub enum MigrateError {
    #[error("Configuration error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {message} {location}")]
    Authentication {
        message: String,
        location: ErrorLocation,
    },

    #[error("Data integrity error: {message} {location}")]
    DataIntegrity {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Remote operation failed: {message} {location}")]
    RemoteOperation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cancelled by operator {location}")]
    Cancelled { location: ErrorLocation },
}

impl MigrateError {
    #[track_caller]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn data_integrity(message: impl Into<String>) -> Self {
        Self::DataIntegrity {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteOperation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn cancelled() -> Self {
        Self::Cancelled {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Configuration { .. } => FailureKind::Configuration,
            Self::Authentication { .. } => FailureKind::Authentication,
            Self::DataIntegrity { .. } => FailureKind::DataIntegrity,
            Self::Storage { .. } => FailureKind::Storage,
            Self::RemoteOperation { .. } => FailureKind::RemoteOperation,
            Self::Cancelled { .. } => FailureKind::Cancelled,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

impl From<CoreError> for MigrateError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        Self::data_integrity(err.to_string())
    }
}

impl From<ConfigError> for MigrateError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::configuration(err.to_string())
    }
}

impl From<ClientError> for MigrateError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        if err.is_auth_failure() {
            Self::authentication(err.to_string())
        } else {
            Self::remote(err.to_string())
        }
    }
}

impl From<PackageError> for MigrateError {
    #[track_caller]
    fn from(err: PackageError) -> Self {
        if err.is_storage() {
            Self::storage(err.to_string())
        } else {
            Self::data_integrity(err.to_string())
        }
    }
}

impl From<LegacyError> for MigrateError {
    #[track_caller]
    fn from(err: LegacyError) -> Self {
        match err {
            LegacyError::Installation { .. } => Self::configuration(err.to_string()),
            LegacyError::Io { .. } | LegacyError::Json { .. } => Self::storage(err.to_string()),
            _ => Self::remote(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MigrateError>;
