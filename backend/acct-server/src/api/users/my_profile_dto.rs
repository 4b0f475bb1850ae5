use acct_core::{Account, AccountStatus};

use serde::Serialize;

/// Owner's view of their own account, including the address
#[derive(Debug, Serialize)]
pub struct MyProfileDto {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub address: String,
    pub status: AccountStatus,
    pub last_login_at: Option<i64>,
}

impl From<Account> for MyProfileDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            email: a.email,
            nickname: a.nickname,
            address: a.address,
            status: a.status,
            last_login_at: a.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}
