use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] acct_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] acct_db::DbError),

    #[error("Mail error: {0}")]
    Mail(#[from] acct_mail::MailError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
