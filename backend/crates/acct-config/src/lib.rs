mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod mail_config;
mod server_config;
mod verification_config;


pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use mail_config::MailConfig;
pub use server_config::ServerConfig;
pub use verification_config::VerificationConfig;

const CONFIG_DIR_ENV: &str = "ACCT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".acct";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "accounts.db";
const DEFAULT_MAX_DB_CONNECTIONS: u32 = 10;
const MIN_MAX_DB_CONNECTIONS: u32 = 1;
const MAX_MAX_DB_CONNECTIONS: u32 = 100;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

const DEFAULT_MAIL_API_URL: &str = "https://api.brevo.com/v3/smtp/email";
const DEFAULT_MAIL_SENDER_NAME: &str = "Accounts";
const DEFAULT_VERIFY_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;

const DEFAULT_REDIRECT_URL: &str = "http://localhost:3000";
