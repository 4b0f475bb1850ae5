pub mod error;
pub mod models;
pub mod ports;
pub mod service;


pub use error::{CoreError, Result, USERS_RESOURCE};
pub use models::account::{Account, NewAccount};
pub use models::account_create::AccountCreate;
pub use models::account_status::AccountStatus;
pub use models::account_update::AccountUpdate;
pub use models::authenticated_identity::AuthenticatedIdentity;
pub use ports::account_store::AccountStore;
pub use ports::notifier::Notifier;
pub use service::account_service::AccountService;

pub use error_location::ErrorLocation;
