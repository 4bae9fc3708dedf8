use std::sync::Arc;

use sqlx::SqlitePool;
use tp_auth::CredentialProxy;
use tp_upstream::UpstreamClient;

/// Shared state handed to every handler.
///
/// The proxy owns the only path from a bearer key to a decrypted upstream
/// token; handlers that talk upstream go through `upstream` with the token
/// a resolve yielded for the current request.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub proxy: Arc<CredentialProxy>,
    pub upstream: Arc<dyn UpstreamClient>,
}
