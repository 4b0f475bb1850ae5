use crate::build_verification_message;

use acct_core::{Notifier, Result as CoreErrorResult};

use async_trait::async_trait;

/// Logs the verification link instead of sending it
pub struct LogNotifier {
    verify_base_url: String,
}

impl LogNotifier {
    pub fn new(verify_base_url: &str) -> Self {
        Self {
            verify_base_url: verify_base_url.to_string(),
        }
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(
        &self,
        recipient_email: &str,
        certification_code: &str,
        account_id: i64,
    ) -> CoreErrorResult<()> {
        let message =
            build_verification_message(&self.verify_base_url, account_id, certification_code);
        log::info!(
            "Mail disabled; verification link for {}: {}",
            recipient_email,
            message.link
        );
        Ok(())
    }
}
