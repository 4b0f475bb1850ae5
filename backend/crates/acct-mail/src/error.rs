use acct_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Mail API rejected message (status {status}): {body} {location}")]
    Rejected {
        status: u16,
        body: String,
        location: ErrorLocation,
    },

    #[error("Mail configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },
}

impl MailError {
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        MailError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for MailError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        MailError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<MailError> for CoreError {
    #[track_caller]
    fn from(e: MailError) -> Self {
        CoreError::notification(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MailError>;
