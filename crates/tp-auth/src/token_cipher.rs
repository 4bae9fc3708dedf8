//! At-rest encryption for upstream tokens.
//!
//! AES-256-GCM with a random 12-byte nonce per encryption. The stored form
//! is base64(nonce || ciphertext+tag), so decryption needs nothing beyond
//! the configured secret.

use crate::error::{AuthError, Result};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ring::aead::{AES_256_GCM, Aad, LessSafeKey, NONCE_LEN, Nonce, UnboundKey};
use ring::rand::{SecureRandom, SystemRandom};

const KEY_BYTES: usize = 32;

pub struct TokenCipher {
    key: LessSafeKey,
    rng: SystemRandom,
}

impl TokenCipher {
    /// Derives the AES key from the first 32 bytes of the configured secret.
    /// Shorter secrets are rejected outright rather than padded.
    pub fn new(secret: &str) -> Result<Self> {
        let bytes = secret.as_bytes();
        if bytes.len() < KEY_BYTES {
            return Err(AuthError::cipher(format!(
                "Secret key must be at least {KEY_BYTES} bytes, got {}",
                bytes.len()
            )));
        }

        let unbound = UnboundKey::new(&AES_256_GCM, &bytes[..KEY_BYTES])
            .map_err(|_| AuthError::cipher("Failed to build AES-256-GCM key"))?;

        Ok(Self {
            key: LessSafeKey::new(unbound),
            rng: SystemRandom::new(),
        })
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        self.rng
            .fill(&mut nonce_bytes)
            .map_err(|_| AuthError::cipher("System random generator failed"))?;
        let nonce = Nonce::assume_unique_for_key(nonce_bytes);

        let mut in_out = plaintext.as_bytes().to_vec();
        self.key
            .seal_in_place_append_tag(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| AuthError::cipher("Encryption failed"))?;

        let mut combined = Vec::with_capacity(NONCE_LEN + in_out.len());
        combined.extend_from_slice(&nonce_bytes);
        combined.extend_from_slice(&in_out);

        Ok(STANDARD.encode(combined))
    }

    pub fn decrypt(&self, encoded: &str) -> Result<String> {
        let combined = STANDARD
            .decode(encoded)
            .map_err(|_| AuthError::cipher("Stored ciphertext is not valid base64"))?;

        if combined.len() < NONCE_LEN {
            return Err(AuthError::cipher("Stored ciphertext is too short"));
        }

        let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LEN);
        let nonce = Nonce::try_assume_unique_for_key(nonce_bytes)
            .map_err(|_| AuthError::cipher("Invalid nonce in stored ciphertext"))?;

        let mut in_out = ciphertext.to_vec();
        let plaintext = self
            .key
            .open_in_place(nonce, Aad::empty(), &mut in_out)
            .map_err(|_| AuthError::cipher("Decryption failed"))?;

        String::from_utf8(plaintext.to_vec())
            .map_err(|_| AuthError::cipher("Decrypted token is not valid UTF-8"))
    }
}
