//! Axum extractor for bearer-key authentication
//!
//! The single enforcement point: every protected handler takes a
//! [`CallerIdentity`] argument, so a request only reaches handler code after
//! its API key resolved to a stored identity.

use crate::ApiError;
use crate::app_state::AppState;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use tp_auth::{AuthError, ResolvedIdentity, extract_bearer};

/// The resolved caller: identity id plus the decrypted upstream token,
/// scoped to this request only.
pub struct CallerIdentity(pub ResolvedIdentity);

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get("Authorization")
                .ok_or(AuthError::MissingAuthorization)?
                .to_str()
                .map_err(|_| AuthError::InvalidScheme)?;

            let api_key = extract_bearer(header)?;
            let resolved = state.proxy.resolve(api_key).await?;

            Ok(CallerIdentity(resolved))
        }
    }
}
