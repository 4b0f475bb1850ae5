use acct_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated: {message} {location}")]
    UniqueViolation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stale version for account {id} (expected {expected_version}) {location}")]
    StaleVersion {
        id: i64,
        expected_version: i64,
        location: ErrorLocation,
    },

    #[error("Account {id} not found {location}")]
    NotFound { id: i64, location: ErrorLocation },

    #[error("Invalid row data: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => Self::UniqueViolation {
                message: db.message().to_string(),
                location,
            },
            source => Self::Sqlx { source, location },
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Storage failures reach the lifecycle service as persistence errors;
/// unique violations and lost optimistic-lock races become conflicts.
impl From<DbError> for CoreError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { message, .. } => CoreError::conflict(message),
            DbError::StaleVersion {
                id,
                expected_version,
                ..
            } => CoreError::conflict(format!(
                "account {} was modified concurrently (expected version {})",
                id, expected_version
            )),
            DbError::NotFound { id, .. } => CoreError::account_not_found(id),
            other => CoreError::persistence(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
