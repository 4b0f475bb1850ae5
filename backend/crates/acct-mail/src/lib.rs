//! Verification notifiers for the account lifecycle service.
//!
//! `HttpMailNotifier` delivers the verification link through a
//! transactional-mail HTTP API. `LogNotifier` only logs it, for local runs
//! where mail is disabled.

mod error;
mod http_mail_notifier;
mod log_notifier;
mod message;


pub use error::{MailError, Result as MailErrorResult};
pub use http_mail_notifier::HttpMailNotifier;
pub use log_notifier::LogNotifier;
pub use message::{VERIFICATION_SUBJECT, VerificationMessage, build_verification_message};

use acct_config::MailConfig;
use acct_core::Notifier;

use std::sync::Arc;

/// Pick the notifier matching the mail configuration
pub fn notifier_from_config(config: &MailConfig) -> MailErrorResult<Arc<dyn Notifier>> {
    if config.enabled {
        Ok(Arc::new(HttpMailNotifier::from_config(config)?))
    } else {
        Ok(Arc::new(LogNotifier::new(&config.verify_base_url)))
    }
}
