//! Account entity - the single registered user record.

use crate::{AccountCreate, AccountStatus, AccountUpdate};

use chrono::{DateTime, Duration, Utc};

/// A registered user account.
///
/// `address` is private to the owner and `certification_code` is never
/// exposed at all; the manual `Debug` impl keeps both out of log lines.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: i64,
    /// Unique, immutable after creation
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub status: AccountStatus,
    /// One-time token emailed at creation, never reissued
    pub certification_code: String,
    pub last_login_at: Option<DateTime<Utc>>,
    /// Optimistic locking version
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    pub fn is_pending(&self) -> bool {
        self.status == AccountStatus::Pending
    }

    /// Exact, case-sensitive comparison against the stored code
    pub fn certification_matches(&self, supplied: &str) -> bool {
        self.certification_code == supplied
    }

    /// PENDING -> ACTIVE. Already active accounts are left as they are.
    pub fn activate(&mut self, now: DateTime<Utc>) {
        if self.is_pending() {
            self.status = AccountStatus::Active;
            self.updated_at = now;
        }
    }

    /// Apply an owner-initiated profile change (nickname and address only)
    pub fn apply_update(&mut self, update: AccountUpdate, now: DateTime<Utc>) {
        self.nickname = update.nickname;
        self.address = update.address;
        self.updated_at = now;
    }

    /// Record a login at `now`.
    ///
    /// The stored timestamp always moves forward, even if the clock has not
    /// advanced past the previous login (millisecond resolution).
    pub fn record_login(&mut self, now: DateTime<Utc>) {
        let next = match self.last_login_at {
            // Stored at millisecond precision, so compare at that precision
            Some(previous) if now.timestamp_millis() <= previous.timestamp_millis() => {
                previous + Duration::milliseconds(1)
            }
            _ => now,
        };
        self.last_login_at = Some(next);
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("nickname", &self.nickname)
            .field("address", &"<redacted>")
            .field("status", &self.status)
            .field("certification_code", &"<redacted>")
            .field("last_login_at", &self.last_login_at)
            .field("version", &self.version)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// An account that has not been persisted yet; the store assigns the id.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub status: AccountStatus,
    pub certification_code: String,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Build a PENDING account from a registration request
    pub fn pending(request: AccountCreate, certification_code: String, now: DateTime<Utc>) -> Self {
        Self {
            email: request.email,
            nickname: request.nickname,
            address: request.address,
            status: AccountStatus::Pending,
            certification_code,
            created_at: now,
        }
    }
}

impl std::fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewAccount")
            .field("email", &self.email)
            .field("nickname", &self.nickname)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
