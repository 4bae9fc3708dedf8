//! The credential proxy: the only component that ever sees raw upstream
//! tokens or raw API keys.
//!
//! Register verifies a token upstream, mints a local API key, and stores
//! only the fingerprint, the bcrypt hash, and the encrypted token. Resolve
//! turns a presented API key back into the caller's identity and decrypted
//! token. Authorize settles model ownership before any upstream call.

use std::sync::Arc;

use crate::api_key::{fingerprint, generate_api_key, hash_api_key, verify_api_key};
use crate::error::{AuthError, Result};
use crate::token_cipher::TokenCipher;

use log::{debug, info};
use tokio::task;
use tp_core::{Identity, ModelRecord};
use tp_db::{IdentityRepository, ModelRepository};
use tp_upstream::{UpstreamClient, UpstreamError};
use uuid::Uuid;

/// What a successful resolve yields: who is calling and the decrypted
/// upstream token to act on their behalf. Never stored, never logged.
pub struct ResolvedIdentity {
    pub id: Uuid,
    pub upstream_token: String,
}

pub struct CredentialProxy {
    identities: IdentityRepository,
    models: ModelRepository,
    upstream: Arc<dyn UpstreamClient>,
    cipher: Arc<TokenCipher>,
}

impl CredentialProxy {
    pub fn new(
        identities: IdentityRepository,
        models: ModelRepository,
        upstream: Arc<dyn UpstreamClient>,
        cipher: Arc<TokenCipher>,
    ) -> Self {
        Self {
            identities,
            models,
            upstream,
            cipher,
        }
    }

    /// Exchanges a raw upstream token for a freshly minted API key.
    ///
    /// The token is verified upstream before anything is written; a token
    /// that only hits a usage limit still registers, since the limit proves
    /// the account is real. The raw API key is returned exactly once.
    pub async fn register(&self, upstream_token: &str) -> Result<String> {
        let status = self
            .upstream
            .verify_token(upstream_token)
            .await
            .map_err(|error| match error {
                UpstreamError::Auth { message, .. } => {
                    AuthError::RejectedUpstreamToken { message }
                }
                other => AuthError::Upstream(other),
            })?;
        debug!("Upstream token verified: {status:?}");

        let api_key = generate_api_key()?;
        let key_fingerprint = fingerprint(&api_key);

        let to_hash = api_key.clone();
        let api_key_hash = task::spawn_blocking(move || hash_api_key(&to_hash))
            .await
            .map_err(|_| AuthError::task())??;

        let encrypted_token = self.cipher.encrypt(upstream_token)?;

        let identity = Identity::new(key_fingerprint, api_key_hash, encrypted_token);
        self.identities.create(&identity).await?;

        info!("Registered identity {}", identity.id);
        Ok(api_key)
    }

    /// Maps a presented API key to its identity and decrypted token.
    ///
    /// The fingerprint narrows the search to at most one row; bcrypt then
    /// confirms the match. Both failure shapes collapse into
    /// [`AuthError::UnknownApiKey`].
    pub async fn resolve(&self, api_key: &str) -> Result<ResolvedIdentity> {
        let key_fingerprint = fingerprint(api_key);

        let identity = self
            .identities
            .find_by_fingerprint(&key_fingerprint)
            .await?
            .ok_or(AuthError::UnknownApiKey)?;

        let presented = api_key.to_string();
        let stored_hash = identity.api_key_hash.clone();
        let verified = task::spawn_blocking(move || verify_api_key(&presented, &stored_hash))
            .await
            .map_err(|_| AuthError::task())??;

        if !verified {
            return Err(AuthError::UnknownApiKey);
        }

        let upstream_token = self.cipher.decrypt(&identity.encrypted_upstream_token)?;

        Ok(ResolvedIdentity {
            id: identity.id,
            upstream_token,
        })
    }

    /// Loads a model and checks it belongs to `identity_id`.
    ///
    /// A missing model and someone else's model are distinct failures:
    /// the id namespace is not secret, ownership is.
    pub async fn authorize_model(&self, identity_id: Uuid, model_id: Uuid) -> Result<ModelRecord> {
        let record = self
            .models
            .find_by_id(model_id)
            .await?
            .ok_or(AuthError::ModelNotFound { id: model_id })?;

        if !record.is_owned_by(identity_id) {
            return Err(AuthError::OwnershipViolation { id: model_id });
        }

        Ok(record)
    }
}
