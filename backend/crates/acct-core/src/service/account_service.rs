//! Account lifecycle service.
//!
//! Owns every business rule around accounts:
//!
//! - creation puts the account in `PENDING` and emails a certification code
//! - public and self lookups only ever see `ACTIVE` accounts
//! - verification is the single `PENDING -> ACTIVE` transition
//! - update and login load the account without a status filter
//!
//! Re-verifying an account that is already `ACTIVE` with its correct code is
//! a no-op success: nothing is written and the account is returned as stored.
//! A wrong code is rejected whatever the status.

use crate::{
    Account, AccountCreate, AccountStatus, AccountStore, AccountUpdate, AuthenticatedIdentity,
    CoreError, NewAccount, Notifier, Result as CoreErrorResult,
};

use std::panic::Location;
use std::sync::Arc;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    notifier: Arc<dyn Notifier>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Register a new PENDING account and send its certification code.
    ///
    /// A notifier failure is logged and does not fail the registration.
    pub async fn create(&self, request: AccountCreate) -> CoreErrorResult<Account> {
        let certification_code = Uuid::new_v4().to_string();
        let new_account = NewAccount::pending(request, certification_code, Utc::now());

        let account = self.store.insert(&new_account).await?;
        info!(
            "Created account {} <{}> in {} state",
            account.id, account.email, account.status
        );

        if let Err(e) = self
            .notifier
            .send(&account.email, &account.certification_code, account.id)
            .await
        {
            warn!(
                "Verification notice for account {} was not delivered: {}",
                account.id, e
            );
        }

        Ok(account)
    }

    /// Public lookup by email; PENDING accounts are invisible here
    pub async fn get_by_email(&self, email: &str) -> CoreErrorResult<Account> {
        self.store
            .find_by_email_and_status(email, AccountStatus::Active)
            .await?
            .ok_or_else(|| CoreError::account_not_found(email))
    }

    /// Public lookup by id; PENDING accounts are invisible here
    pub async fn get_by_id(&self, id: i64) -> CoreErrorResult<Account> {
        self.store
            .find_by_id_and_status(id, AccountStatus::Active)
            .await?
            .ok_or_else(|| CoreError::account_not_found(id))
    }

    /// The caller's own account. This is the only read path whose result may
    /// be rendered with the private address.
    pub async fn get_self(&self, identity: &AuthenticatedIdentity) -> CoreErrorResult<Account> {
        self.get_by_email(identity.email()).await
    }

    /// Replace nickname and address. Does not require ACTIVE status.
    pub async fn update(&self, id: i64, update: AccountUpdate) -> CoreErrorResult<Account> {
        let mut account = self.load(id).await?;
        account.apply_update(update, Utc::now());

        let account = self.store.update(&account).await?;
        info!("Updated profile of account {}", account.id);

        Ok(account)
    }

    /// Resolve the caller's own ACTIVE account, then update it
    pub async fn update_self(
        &self,
        identity: &AuthenticatedIdentity,
        update: AccountUpdate,
    ) -> CoreErrorResult<Account> {
        let account = self.get_self(identity).await?;
        self.update(account.id, update).await
    }

    /// Stamp `last_login_at`. Does not require ACTIVE status.
    pub async fn login(&self, id: i64) -> CoreErrorResult<Account> {
        let mut account = self.load(id).await?;
        account.record_login(Utc::now());

        let account = self.store.update(&account).await?;
        info!(
            "Account {} logged in at {:?}",
            account.id, account.last_login_at
        );

        Ok(account)
    }

    /// Check the supplied certification code and activate the account.
    pub async fn verify_email(
        &self,
        id: i64,
        certification_code: &str,
    ) -> CoreErrorResult<Account> {
        let mut account = self.load(id).await?;

        if !account.certification_matches(certification_code) {
            warn!("Certification code mismatch for account {}", id);
            return Err(CoreError::CertificationCodeNotMatched {
                account_id: id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if account.is_active() {
            debug!("Account {} is already active, nothing to verify", id);
            return Ok(account);
        }

        account.activate(Utc::now());
        let account = self.store.update(&account).await?;
        info!("Account {} verified and activated", account.id);

        Ok(account)
    }

    /// Unfiltered load used by the write paths
    async fn load(&self, id: i64) -> CoreErrorResult<Account> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::account_not_found(id))
    }
}
