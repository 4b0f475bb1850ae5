use crate::{AppState, create_user, get_me, get_user, health, update_me, verify_user};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Accounts; the static `me` segment wins over `{id}`
        .route("/api/users", post(create_user))
        .route("/api/users/me", get(get_me).put(update_me))
        .route("/api/users/{id}", get(get_user))
        .route("/api/users/{id}/verify", get(verify_user))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
