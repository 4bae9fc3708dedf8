pub mod api_key;
pub mod credential_proxy;
pub mod error;
pub mod token_cipher;

pub use api_key::{extract_bearer, fingerprint, generate_api_key, hash_api_key, verify_api_key};
pub use credential_proxy::{CredentialProxy, ResolvedIdentity};
pub use error::{AuthError, Result};
pub use token_cipher::TokenCipher;

#[cfg(test)]
mod tests;
