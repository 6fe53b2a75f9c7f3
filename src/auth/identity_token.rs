//! Identity token derivation.
//!
//! An identity token lets a browser or mobile client act as a known account
//! without holding the private key. The token is the AES-256-GCM encryption
//! of `v1;{kind};{uid}` under the private key, laid out as
//! `nonce ‖ ciphertext ‖ tag` and encoded with URL-safe base64.
//!
//! # Key Requirements
//!
//! The private key's bytes are used directly as the AES-256 key, so the key
//! must be exactly 32 bytes long.
//!
//! # Example
//!
//! ```rust,ignore
//! use dashx::auth::generate_identity_token;
//!
//! let token = generate_identity_token(config.private_key(), "user-42", None)?;
//! ```

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::RngCore;
use thiserror::Error;

use crate::config::PrivateKey;

/// Plaintext format version.
pub const TOKEN_VERSION: &str = "v1";

/// Token kind used when none is given.
pub const DEFAULT_TOKEN_KIND: &str = "regular";

/// AES-256 key length in bytes.
pub const KEY_LEN: usize = 32;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// Errors that can occur while deriving an identity token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentityTokenError {
    /// The private key cannot be used as an AES-256 key.
    #[error("Private key must be exactly {KEY_LEN} bytes to generate identity tokens, got {len}")]
    InvalidKeyLength {
        /// The actual key length in bytes.
        len: usize,
    },

    /// The cipher rejected the plaintext.
    #[error("Failed to encrypt identity token")]
    Encryption,
}

/// Derives an identity token for `uid` with a freshly generated nonce.
///
/// `kind` defaults to [`DEFAULT_TOKEN_KIND`].
///
/// # Errors
///
/// Returns [`IdentityTokenError::InvalidKeyLength`] before any encryption is
/// attempted if the private key is not [`KEY_LEN`] bytes.
pub fn generate_identity_token(
    private_key: &PrivateKey,
    uid: &str,
    kind: Option<&str>,
) -> Result<String, IdentityTokenError> {
    let mut nonce = [0u8; NONCE_LEN];
    rand::thread_rng().fill_bytes(&mut nonce);
    seal(private_key.as_bytes(), uid, kind, nonce)
}

/// Deterministic core of [`generate_identity_token`].
fn seal(
    key: &[u8],
    uid: &str,
    kind: Option<&str>,
    nonce: [u8; NONCE_LEN],
) -> Result<String, IdentityTokenError> {
    if key.len() != KEY_LEN {
        return Err(IdentityTokenError::InvalidKeyLength { len: key.len() });
    }

    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|_| IdentityTokenError::InvalidKeyLength { len: key.len() })?;

    let kind = kind.unwrap_or(DEFAULT_TOKEN_KIND);
    let plaintext = format!("{TOKEN_VERSION};{kind};{uid}");

    // aes-gcm appends the 16-byte tag to the ciphertext
    let sealed = cipher
        .encrypt(&Nonce::from(nonce), plaintext.as_bytes())
        .map_err(|_| IdentityTokenError::Encryption)?;

    let mut payload = Vec::with_capacity(NONCE_LEN + sealed.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&sealed);

    Ok(URL_SAFE.encode(payload))
}
