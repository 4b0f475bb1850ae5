use crate::{ConfigError, ConfigErrorResult, DEFAULT_REDIRECT_URL};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    /// Where the browser is sent after a successful verification
    pub redirect_url: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            redirect_url: String::from(DEFAULT_REDIRECT_URL),
        }
    }
}

impl VerificationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.redirect_url.trim().is_empty() {
            return Err(ConfigError::verification(
                "verification.redirect_url cannot be empty",
            ));
        }

        if !self.redirect_url.starts_with("http://") && !self.redirect_url.starts_with("https://")
        {
            return Err(ConfigError::verification(format!(
                "verification.redirect_url must be an http(s) URL, got '{}'",
                self.redirect_url
            )));
        }

        // Sent verbatim as the Location header
        if !self.redirect_url.chars().all(|c| (' '..='~').contains(&c)) {
            return Err(ConfigError::verification(
                "verification.redirect_url must be printable ASCII",
            ));
        }

        Ok(())
    }
}
