use crate::{
    CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIR,
    DatabaseConfig, LoggingConfig, MailConfig, ServerConfig, VerificationConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub mail: MailConfig,
    pub verification: VerificationConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Read a `.env` file from the working directory, if any
    /// 2. Resolve ACCT_CONFIG_DIR, else ./.acct/, creating it if missing
    /// 3. Parse config.toml if it exists, else use defaults
    /// 4. Apply ACCT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: ACCT_CONFIG_DIR env var > ./.acct/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.mail.validate()?;
        self.verification.validate()?;

        Ok(())
    }

    /// Absolute path to the SQLite file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Absolute path to the log directory.
    pub fn log_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.logging.dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}", self.bind_addr());
        info!(
            "  database: {} (max {} connections)",
            self.database.path, self.database.max_connections
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
        info!(
            "  mail: {} (api_key: {}, verify_base_url: {})",
            if self.mail.enabled {
                "enabled"
            } else {
                "disabled"
            },
            if self.mail.api_key.is_some() {
                "set"
            } else {
                "unset"
            },
            self.mail.verify_base_url
        );
        info!(
            "  verification: redirect_url={}",
            self.verification.redirect_url
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ACCT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ACCT_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("ACCT_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "ACCT_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );

        // Logging
        Self::apply_env_parse("ACCT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ACCT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_string("ACCT_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_option_string("ACCT_LOG_FILE", &mut self.logging.file);

        // Mail
        Self::apply_env_bool("ACCT_MAIL_ENABLED", &mut self.mail.enabled);
        Self::apply_env_string("ACCT_MAIL_API_URL", &mut self.mail.api_url);
        Self::apply_env_option_string("ACCT_MAIL_API_KEY", &mut self.mail.api_key);
        Self::apply_env_option_string("ACCT_MAIL_SENDER_EMAIL", &mut self.mail.sender_email);
        Self::apply_env_string("ACCT_MAIL_SENDER_NAME", &mut self.mail.sender_name);
        Self::apply_env_string(
            "ACCT_MAIL_VERIFY_BASE_URL",
            &mut self.mail.verify_base_url,
        );
        Self::apply_env_parse("ACCT_MAIL_TIMEOUT_SECS", &mut self.mail.timeout_secs);

        // Verification
        Self::apply_env_string(
            "ACCT_VERIFICATION_REDIRECT_URL",
            &mut self.verification.redirect_url,
        );
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
