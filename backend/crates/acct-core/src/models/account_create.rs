/// Registration input for a new account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountCreate {
    pub email: String,
    pub nickname: String,
    pub address: String,
}
