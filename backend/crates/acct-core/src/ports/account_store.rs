//! Persistence contract for accounts.
//!
//! Filtered and unfiltered lookups are separate operations so each call site
//! states which visibility rule it depends on. A missing row is `Ok(None)`,
//! never an error; the caller decides what absence means.

use crate::{Account, AccountStatus, NewAccount, Result as CoreErrorResult};

use async_trait::async_trait;

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Lookup by id regardless of status
    async fn find_by_id(&self, id: i64) -> CoreErrorResult<Option<Account>>;

    /// Lookup by email regardless of status
    async fn find_by_email(&self, email: &str) -> CoreErrorResult<Option<Account>>;

    /// Lookup by id; `None` if the row exists with a different status
    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: AccountStatus,
    ) -> CoreErrorResult<Option<Account>>;

    /// Lookup by email; `None` if the row exists with a different status
    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: AccountStatus,
    ) -> CoreErrorResult<Option<Account>>;

    /// Persist a new account and return it with its assigned id.
    /// A duplicate email fails with `CoreError::Conflict`.
    async fn insert(&self, account: &NewAccount) -> CoreErrorResult<Account>;

    /// Overwrite the stored record. Fails with `CoreError::Conflict` when
    /// `account.version` no longer matches the stored version; on success the
    /// returned account carries the bumped version.
    async fn update(&self, account: &Account) -> CoreErrorResult<Account>;
}
