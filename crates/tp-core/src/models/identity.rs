//! Identity - the stored link between a hashed local API key and an
//! encrypted upstream token.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One row per registration. Never mutated after creation; there is no
/// key-rotation path in the current design.
///
/// The raw API key is never stored: `api_key_fingerprint` is a fast SHA-256
/// lookup key, `api_key_hash` is the bcrypt hash used for final verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    /// SHA-256 hex of the raw API key. Unique, equality-indexed.
    pub api_key_fingerprint: String,
    /// bcrypt hash of the raw API key.
    pub api_key_hash: String,
    /// AES-256-GCM ciphertext (nonce || ct, base64) of the upstream token.
    pub encrypted_upstream_token: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(
        api_key_fingerprint: String,
        api_key_hash: String,
        encrypted_upstream_token: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            api_key_fingerprint,
            api_key_hash,
            encrypted_upstream_token,
            created_at: Utc::now(),
        }
    }
}
