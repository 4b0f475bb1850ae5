pub mod create_user_request;
pub mod my_profile_dto;
pub mod update_user_request;
pub mod user_dto;
#[allow(clippy::module_inception)]
pub mod users;
pub mod verify_query;
