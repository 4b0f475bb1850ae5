use acct_core::{Account, AccountStatus};

use serde::Serialize;

/// Public view of an account. Never carries the address.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub status: AccountStatus,
    /// Epoch milliseconds
    pub last_login_at: Option<i64>,
}

impl From<Account> for UserDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            email: a.email,
            nickname: a.nickname,
            status: a.status,
            last_login_at: a.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}
