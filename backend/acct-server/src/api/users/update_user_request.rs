use acct_core::AccountUpdate;

use serde::Deserialize;

/// Both fields replace the stored values
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub nickname: String,
    pub address: String,
}

impl From<UpdateUserRequest> for AccountUpdate {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            nickname: r.nickname,
            address: r.address,
        }
    }
}
