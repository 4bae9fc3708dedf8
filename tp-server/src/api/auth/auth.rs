//! Registration handler
//!
//! Exchanges an upstream token for a service API key.

use crate::{ApiResult, SetupRequest, SetupResponse};
use crate::app_state::AppState;

use axum::{Json, extract::State, http::StatusCode};
use log::info;

/// POST /api/v1/auth/setup
///
/// Verify the supplied upstream token, then mint and return a fresh API key.
/// The key is never shown again.
pub async fn setup(
    State(state): State<AppState>,
    Json(request): Json<SetupRequest>,
) -> ApiResult<(StatusCode, Json<SetupResponse>)> {
    let api_key = state.proxy.register(&request.upstream_token).await?;
    info!("New identity registered");

    Ok((StatusCode::CREATED, Json(SetupResponse { api_key })))
}
