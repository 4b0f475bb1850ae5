pub mod account;
pub mod account_create;
pub mod account_status;
pub mod account_update;
pub mod authenticated_identity;
