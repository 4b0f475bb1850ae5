use crate::Result as CoreErrorResult;

use async_trait::async_trait;

/// Outbound verification message channel (email in production).
///
/// Delivery is best-effort: the lifecycle service logs failures and carries on.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        recipient_email: &str,
        certification_code: &str,
        account_id: i64,
    ) -> CoreErrorResult<()>;
}
