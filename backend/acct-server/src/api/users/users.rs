//! Account REST API handlers

use crate::{
    ApiError, ApiResult, AppState, CallerEmail, CreateUserRequest, MyProfileDto,
    UpdateUserRequest, UserDto, VerifyQuery,
};

use acct_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

/// Count the failure, then convert it for the response
fn record_failure(state: &AppState, e: CoreError) -> ApiError {
    let error = ApiError::from(e);
    state.metrics.error_occurred(error.code());
    error
}

/// Path ids arrive as text so a malformed id still gets the JSON error envelope
fn parse_account_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::validation(format!("Invalid account id: {}", raw), "id"))
}

// =============================================================================
// Public
// =============================================================================

/// POST /api/users
///
/// Register a PENDING account and send its verification mail
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    request.validate()?;

    let account = state
        .service
        .create(request.into())
        .await
        .map_err(|e| record_failure(&state, e))?;
    state.metrics.account_created();

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// GET /api/users/{id}
///
/// Public view of an ACTIVE account
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let id = parse_account_id(&id)?;
    let account = state
        .service
        .get_by_id(id)
        .await
        .map_err(|e| record_failure(&state, e))?;

    Ok(Json(account.into()))
}

/// GET /api/users/{id}/verify?certificationCode=...
///
/// Activate the account and redirect (302) to the configured page
pub async fn verify_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<VerifyQuery>,
) -> ApiResult<Response> {
    let id = parse_account_id(&id)?;
    let certification_code = query.certification_code.ok_or_else(|| {
        ApiError::validation("certificationCode is required", "certificationCode")
    })?;

    // Build the redirect before activating so a bad target cannot fail after the write
    let location = HeaderValue::from_str(&state.verification_redirect_url).map_err(|e| {
        ApiError::Internal {
            message: format!("Invalid verification redirect url: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    state
        .service
        .verify_email(id, &certification_code)
        .await
        .map_err(|e| record_failure(&state, e))?;
    state.metrics.account_verified();

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

// =============================================================================
// Self (EMAIL header)
// =============================================================================

/// GET /api/users/me
///
/// Owner's profile; also records a login
pub async fn get_me(
    State(state): State<AppState>,
    CallerEmail(identity): CallerEmail,
) -> ApiResult<Json<MyProfileDto>> {
    let account = state
        .service
        .get_self(&identity)
        .await
        .map_err(|e| record_failure(&state, e))?;
    let account = state
        .service
        .login(account.id)
        .await
        .map_err(|e| record_failure(&state, e))?;
    state.metrics.login_recorded();

    Ok(Json(account.into()))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    CallerEmail(identity): CallerEmail,
    Json(request): Json<UpdateUserRequest>,
) -> ApiResult<Json<MyProfileDto>> {
    let account = state
        .service
        .update_self(&identity, request.into())
        .await
        .map_err(|e| record_failure(&state, e))?;
    state.metrics.profile_updated();

    Ok(Json(account.into()))
}
