use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

/// Resource name used in not-found messages for accounts
pub const USERS_RESOURCE: &str = "Users";

#[derive(Error, Debug)]
pub enum CoreError {
    /// Account absent, or filtered out by status
    #[error("{resource}에서 ID {id}를 찾을 수 없습니다. {location}")]
    ResourceNotFound {
        resource: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("자격 증명에 실패하였습니다. (account {account_id}) {location}")]
    CertificationCodeNotMatched {
        account_id: i64,
        location: ErrorLocation,
    },

    #[error("Invalid account status: {value} {location}")]
    InvalidAccountStatus {
        value: String,
        location: ErrorLocation,
    },

    /// Unique constraint violation or stale optimistic-lock version
    #[error("Persistence conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Persistence error: {message} {location}")]
    Persistence {
        message: String,
        location: ErrorLocation,
    },

    #[error("Notification error: {message} {location}")]
    Notification {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a not-found error for an account looked up by id or email
    #[track_caller]
    pub fn account_not_found<S: ToString>(id: S) -> Self {
        CoreError::ResourceNotFound {
            resource: USERS_RESOURCE,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        CoreError::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        CoreError::Persistence {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn notification<S: Into<String>>(message: S) -> Self {
        CoreError::Notification {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
