//! Caller identity from the `EMAIL` request header

use crate::ApiError;

use acct_core::AuthenticatedIdentity;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

pub const EMAIL_HEADER: &str = "EMAIL";

/// The authenticated caller, asserted by the `EMAIL` header.
///
/// A missing, blank or non-ASCII header is rejected with 401.
#[derive(Debug)]
pub struct CallerEmail(pub AuthenticatedIdentity);

impl<S> FromRequestParts<S> for CallerEmail
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let email = parts
                .headers
                .get(EMAIL_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|email| !email.is_empty())
                .ok_or_else(|| ApiError::Unauthorized {
                    message: format!("Missing {} header", EMAIL_HEADER),
                    location: ErrorLocation::from(Location::caller()),
                })?;

            log::debug!("Caller identified by {} header: {}", EMAIL_HEADER, email);
            Ok(CallerEmail(AuthenticatedIdentity::new(email)))
        }
    }
}
