use crate::RecordId;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("User {user_id} references unknown role {role_id} {location}")]
    UnknownRole {
        user_id: RecordId,
        role_id: RecordId,
        location: ErrorLocation,
    },

    #[error("No destination role mapped for source role {role_id} {location}")]
    UnmappedRole {
        role_id: RecordId,
        location: ErrorLocation,
    },

    #[error("No destination user mapped for source user {user_id} {location}")]
    UnmappedUser {
        user_id: RecordId,
        location: ErrorLocation,
    },

    #[error("Record is missing required field '{field}' {location}")]
    MissingField {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Field '{field}' has an unexpected type: {message} {location}")]
    InvalidField {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn unknown_role(user_id: RecordId, role_id: RecordId) -> Self {
        Self::UnknownRole {
            user_id,
            role_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unmapped_role(role_id: RecordId) -> Self {
        Self::UnmappedRole {
            role_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unmapped_user(user_id: RecordId) -> Self {
        Self::UnmappedUser {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
