use crate::app_state::AppState;
use crate::health;
use crate::{fit, fit_upload, list_models, predict, predict_upload, setup};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Maximum accepted request body, covers CSV uploads.
const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Credential proxy
        .route("/api/v1/auth/setup", post(setup))
        // Models
        .route("/api/v1/models", get(list_models))
        .route("/api/v1/models/fit", post(fit))
        .route("/api/v1/models/fit/upload", post(fit_upload))
        .route("/api/v1/models/{model_id}/predict", post(predict))
        .route(
            "/api/v1/models/{model_id}/predict/upload",
            post(predict_upload),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
