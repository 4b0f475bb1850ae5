/// Owner-editable profile fields. Both are replaced on update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountUpdate {
    pub nickname: String,
    pub address: String,
}
