use crate::Metrics;

use acct_core::AccountService;

use sqlx::SqlitePool;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub service: AccountService,
    pub metrics: Metrics,
    /// Target of the redirect issued after a successful verification
    pub verification_redirect_url: String,
}
