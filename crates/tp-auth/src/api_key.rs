//! API key generation, fingerprinting, and hashing.
//!
//! Keys are 32 random bytes, URL-safe base64 without padding. Lookup uses a
//! SHA-256 hex fingerprint so the database can resolve a key with one
//! indexed equality query; the stored bcrypt hash is checked afterwards as
//! the authoritative comparison.

use crate::error::{AuthError, Result};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use ring::digest::{SHA256, digest};
use ring::rand::{SecureRandom, SystemRandom};

const API_KEY_BYTES: usize = 32;

pub fn generate_api_key() -> Result<String> {
    let rng = SystemRandom::new();
    let mut bytes = [0u8; API_KEY_BYTES];
    rng.fill(&mut bytes)
        .map_err(|_| AuthError::cipher("System random generator failed"))?;

    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// SHA-256 hex of the raw key. Deterministic, used only as a lookup column.
pub fn fingerprint(api_key: &str) -> String {
    let hash = digest(&SHA256, api_key.as_bytes());
    hash.as_ref().iter().map(|b| format!("{b:02x}")).collect()
}

/// bcrypt at the default cost. CPU-bound; call from a blocking context.
pub fn hash_api_key(api_key: &str) -> Result<String> {
    bcrypt::hash(api_key, bcrypt::DEFAULT_COST).map_err(AuthError::hash)
}

/// bcrypt comparison. CPU-bound; call from a blocking context.
pub fn verify_api_key(api_key: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(api_key, hash).map_err(AuthError::hash)
}

/// Pulls the raw key out of an `Authorization: Bearer <key>` header value.
pub fn extract_bearer(header: &str) -> Result<&str> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidScheme)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::InvalidScheme);
    }

    Ok(token)
}
