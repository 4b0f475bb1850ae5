use crate::{ApiError, ApiResult};

use acct_core::AccountCreate;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub nickname: String,
    pub address: String,
}

impl CreateUserRequest {
    /// Reject blank fields and addresses without an `@`
    pub fn validate(&self) -> ApiResult<()> {
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ApiError::validation("email must be a valid address", "email"));
        }
        if self.nickname.trim().is_empty() {
            return Err(ApiError::validation("nickname cannot be empty", "nickname"));
        }
        Ok(())
    }
}

impl From<CreateUserRequest> for AccountCreate {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            email: r.email.trim().to_string(),
            nickname: r.nickname,
            address: r.address,
        }
    }
}
