use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackageError {
    #[error("IO error at {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Invalid archive {path}: {source} {location}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
        location: ErrorLocation,
    },

    #[error("Archive entry '{name}' escapes the target directory {location}")]
    UnsafeEntry {
        name: String,
        location: ErrorLocation,
    },

    #[error("No course.json found under {dir} {location}")]
    MissingCourseDocument {
        dir: PathBuf,
        location: ErrorLocation,
    },

    #[error("Invalid course document {path}: {message} {location}")]
    InvalidCourseDocument {
        path: PathBuf,
        message: String,
        location: ErrorLocation,
    },

    #[error("Hero image not found at {path} {location}")]
    MissingHeroImage {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to scan {dir}: {source} {location}")]
    Walk {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
        location: ErrorLocation,
    },

    #[error("Packaging task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },
}

impl PackageError {
    #[track_caller]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn zip(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Zip {
            path: path.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_document(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidCourseDocument {
            path: path.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Failure reading or writing the file system, as opposed to bad content
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::Zip { .. }
                | Self::MissingHeroImage { .. }
                | Self::Walk { .. }
                | Self::Task { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PackageError>;
