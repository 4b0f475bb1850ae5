pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::caller_email::CallerEmail,
    users::{
        create_user_request::CreateUserRequest,
        my_profile_dto::MyProfileDto,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        users::{create_user, get_me, get_user, update_me, verify_user},
        verify_query::VerifyQuery,
    },
};
pub use app_state::AppState;
pub use crate::metrics::Metrics;

pub use crate::routes::build_router;
