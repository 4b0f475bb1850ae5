use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAIL_API_URL, DEFAULT_MAIL_SENDER_NAME,
    DEFAULT_MAIL_TIMEOUT_SECS, DEFAULT_VERIFY_BASE_URL,
};

use serde::Deserialize;

/// Outbound verification mail.
///
/// When `enabled` is false the server logs verification links instead of
/// sending them.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    pub enabled: bool,
    /// Transactional mail HTTP endpoint
    pub api_url: String,
    pub api_key: Option<String>,
    pub sender_email: Option<String>,
    pub sender_name: String,
    /// Public base URL the verification link points at
    pub verify_base_url: String,
    pub timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: String::from(DEFAULT_MAIL_API_URL),
            api_key: None,
            sender_email: None,
            sender_name: String::from(DEFAULT_MAIL_SENDER_NAME),
            verify_base_url: String::from(DEFAULT_VERIFY_BASE_URL),
            timeout_secs: DEFAULT_MAIL_TIMEOUT_SECS,
        }
    }
}

// api_key stays out of Debug output
impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("enabled", &self.enabled)
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("sender_email", &self.sender_email)
            .field("sender_name", &self.sender_name)
            .field("verify_base_url", &self.verify_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl MailConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.verify_base_url.starts_with("http://")
            && !self.verify_base_url.starts_with("https://")
        {
            return Err(ConfigError::mail(format!(
                "mail.verify_base_url must be an http(s) URL, got '{}'",
                self.verify_base_url
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        if self.api_url.trim().is_empty() {
            return Err(ConfigError::mail("mail.api_url is required when mail is enabled"));
        }
        if self.api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            return Err(ConfigError::mail("mail.api_key is required when mail is enabled"));
        }
        if self
            .sender_email
            .as_deref()
            .is_none_or(|e| e.trim().is_empty())
        {
            return Err(ConfigError::mail(
                "mail.sender_email is required when mail is enabled",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::mail("mail.timeout_secs must be greater than 0"));
        }

        Ok(())
    }
}
