//! Account repository - SQLite implementation of `AccountStore`.
//!
//! Timestamps are stored as Unix epoch milliseconds so that consecutive
//! logins within the same second remain ordered.
//!
//! `update` uses optimistic locking: the row is only written when the stored
//! `version` equals the version the caller loaded, and the version is bumped
//! on every successful write.

use crate::{DbError, Result as DbErrorResult};

use acct_core::{
    Account, AccountStatus, AccountStore, ErrorLocation, NewAccount,
    Result as CoreErrorResult,
};

use std::panic::Location;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const SELECT_COLUMNS: &str = r#"
    SELECT id, email, nickname, address, status, certification_code,
        last_login_at, version, created_at, updated_at
    FROM users
"#;

#[derive(FromRow)]
pub(crate) struct AccountRow {
    pub(crate) id: i64,
    pub(crate) email: String,
    pub(crate) nickname: String,
    pub(crate) address: String,
    pub(crate) status: String,
    pub(crate) certification_code: String,
    pub(crate) last_login_at: Option<i64>,
    pub(crate) version: i64,
    pub(crate) created_at: i64,
    pub(crate) updated_at: i64,
}

impl std::fmt::Debug for AccountRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountRow")
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

impl TryFrom<AccountRow> for Account {
    type Error = DbError;

    fn try_from(r: AccountRow) -> DbErrorResult<Self> {
        Ok(Account {
            id: r.id,
            email: r.email,
            nickname: r.nickname,
            address: r.address,
            status: AccountStatus::from_str(&r.status).map_err(|e| DbError::Decode {
                message: format!("Invalid AccountStatus in users.status: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?,
            certification_code: r.certification_code,
            last_login_at: r
                .last_login_at
                .map(|ms| millis_to_datetime(ms, "users.last_login_at"))
                .transpose()?,
            version: r.version,
            created_at: millis_to_datetime(r.created_at, "users.created_at")?,
            updated_at: millis_to_datetime(r.updated_at, "users.updated_at")?,
        })
    }
}

#[track_caller]
fn millis_to_datetime(ms: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms).ok_or_else(|| DbError::Decode {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct AccountRepository {
    pool: SqlitePool,
}

impl AccountRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, account: &NewAccount) -> DbErrorResult<Account> {
        let created_at = account.created_at.timestamp_millis();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    email, nickname, address, status, certification_code,
                    last_login_at, version, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, NULL, 1, ?, ?)
            "#,
        )
        .bind(&account.email)
        .bind(&account.nickname)
        .bind(&account.address)
        .bind(account.status.as_str())
        .bind(&account.certification_code)
        .bind(created_at)
        .bind(created_at)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        log::debug!("Inserted users row {}", id);

        Ok(Account {
            id,
            email: account.email.clone(),
            nickname: account.nickname.clone(),
            address: account.address.clone(),
            status: account.status,
            certification_code: account.certification_code.clone(),
            last_login_at: None,
            version: 1,
            created_at: millis_to_datetime(created_at, "users.created_at")?,
            updated_at: millis_to_datetime(created_at, "users.updated_at")?,
        })
    }

    /// Overwrite the mutable columns; `email` and `certification_code` are
    /// never rewritten.
    pub async fn update(&self, account: &Account) -> DbErrorResult<Account> {
        let last_login_at = account.last_login_at.map(|dt| dt.timestamp_millis());
        let updated_at = account.updated_at.timestamp_millis();

        let result = sqlx::query(
            r#"
                UPDATE users
                SET nickname = ?, address = ?, status = ?, last_login_at = ?,
                    updated_at = ?, version = version + 1
                WHERE id = ? AND version = ?
            "#,
        )
        .bind(&account.nickname)
        .bind(&account.address)
        .bind(account.status.as_str())
        .bind(last_login_at)
        .bind(updated_at)
        .bind(account.id)
        .bind(account.version)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return match self.find_by_id(account.id).await? {
                Some(_) => Err(DbError::StaleVersion {
                    id: account.id,
                    expected_version: account.version,
                    location: ErrorLocation::from(Location::caller()),
                }),
                None => Err(DbError::NotFound {
                    id: account.id,
                    location: ErrorLocation::from(Location::caller()),
                }),
            };
        }

        self.find_by_id(account.id)
            .await?
            .ok_or_else(|| DbError::NotFound {
                id: account.id,
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Account>> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Account::try_from).transpose()
    }

    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<Account>> {
        let sql = format!("{} WHERE email = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Account::try_from).transpose()
    }

    pub async fn find_by_id_and_status(
        &self,
        id: i64,
        status: AccountStatus,
    ) -> DbErrorResult<Option<Account>> {
        let sql = format!("{} WHERE id = ? AND status = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Account::try_from).transpose()
    }

    pub async fn find_by_email_and_status(
        &self,
        email: &str,
        status: AccountStatus,
    ) -> DbErrorResult<Option<Account>> {
        let sql = format!("{} WHERE email = ? AND status = ?", SELECT_COLUMNS);
        let row = sqlx::query_as::<_, AccountRow>(&sql)
            .bind(email)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Account::try_from).transpose()
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: i64) -> CoreErrorResult<Option<Account>> {
        Ok(AccountRepository::find_by_id(self, id).await?)
    }

    async fn find_by_email(&self, email: &str) -> CoreErrorResult<Option<Account>> {
        Ok(AccountRepository::find_by_email(self, email).await?)
    }

    async fn find_by_id_and_status(
        &self,
        id: i64,
        status: AccountStatus,
    ) -> CoreErrorResult<Option<Account>> {
        Ok(AccountRepository::find_by_id_and_status(self, id, status).await?)
    }

    async fn find_by_email_and_status(
        &self,
        email: &str,
        status: AccountStatus,
    ) -> CoreErrorResult<Option<Account>> {
        Ok(AccountRepository::find_by_email_and_status(self, email, status).await?)
    }

    async fn insert(&self, account: &NewAccount) -> CoreErrorResult<Account> {
        Ok(AccountRepository::insert(self, account).await?)
    }

    async fn update(&self, account: &Account) -> CoreErrorResult<Account> {
        Ok(AccountRepository::update(self, account).await?)
    }
}
