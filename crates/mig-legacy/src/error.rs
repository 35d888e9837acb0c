use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegacyError {
    #[error("Failed to read {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Malformed JSON in {path}: {source} {location}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Legacy installation invalid: {message} {location}")]
    Installation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to spawn legacy server '{command}': {source} {location}")]
    ProcessSpawn {
        command: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Legacy server exited during startup with {status} {location}")]
    ProcessExited {
        status: String,
        location: ErrorLocation,
    },

    #[error("Legacy server failed to become ready within {timeout_secs}s {location}")]
    StartupTimeout {
        timeout_secs: u64,
        location: ErrorLocation,
    },

    #[error("No export actor set {location}")]
    NoActor { location: ErrorLocation },

    #[error("Export of course {course_id} failed: {message} {location}")]
    Export {
        course_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request to legacy server failed: {source} {location}")]
    Http {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },
}

impl LegacyError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn installation(message: impl Into<String>) -> Self {
        Self::Installation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn export(course_id: impl ToString, message: impl Into<String>) -> Self {
        Self::Export {
            course_id: course_id.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// The installation itself is unusable, as opposed to a single export failing
    pub fn is_setup_failure(&self) -> bool {
        !matches!(self, Self::Export { .. })
    }
}

impl From<reqwest::Error> for LegacyError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::Http {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LegacyError>;
