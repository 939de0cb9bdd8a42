//! AES-GCM sealing with a prepended random nonce.
//!
//! Sealed payload layout (before hex encoding):
//!
//! ```text
//! +----------------+----------------------------+
//! | nonce (12 B)   | ciphertext ‖ tag (len+16 B) |
//! +----------------+----------------------------+
//! ```
//!
//! No version byte, associated data, or key id is embedded. The key size
//! (16, 24 or 32 bytes) selects AES-128, AES-192 or AES-256.

use aes_gcm::{
    aead::{consts::U12, generic_array::GenericArray, Aead, AeadCore, KeyInit},
    aes::Aes192,
    Aes128Gcm, Aes256Gcm, AesGcm,
};

use crate::error::{CoderError, Result};
use crate::generator::random::{random_nonce_12, random_vec};

/// AES-GCM nonce size in bytes.
pub const NONCE_SIZE: usize = 12;
/// AES-GCM authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

type Aes192Gcm = AesGcm<Aes192, U12>;

/// AES key size, chosen by the length of the configured secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyStrength {
    Aes128,
    Aes192,
    Aes256,
}

impl KeyStrength {
    /// Map a secret length to its key strength.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(CoderError::InvalidKeyLength(other)),
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        match self {
            Self::Aes128 => 16,
            Self::Aes192 => 24,
            Self::Aes256 => 32,
        }
    }

    /// Key length in bits.
    pub fn bits(self) -> usize {
        self.key_len() * 8
    }

    /// Fresh OS-random key material of the right length.
    pub fn generate_key(self) -> Result<Vec<u8>> {
        random_vec(self.key_len())
    }
}

fn build<C: KeyInit>(key: &[u8]) -> Result<C> {
    C::new_from_slice(key).map_err(|e| CoderError::CipherConstruction(format!("cipher init: {e}")))
}

fn seal_with<C>(key: &[u8], nonce: &[u8; NONCE_SIZE], plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: KeyInit + Aead + AeadCore<NonceSize = U12>,
{
    build::<C>(key)?
        .encrypt(GenericArray::from_slice(nonce), plaintext)
        .map_err(|e| CoderError::CipherConstruction(format!("seal: {e}")))
}

fn open_with<C>(key: &[u8], nonce: &[u8], body: &[u8]) -> Result<Vec<u8>>
where
    C: KeyInit + Aead + AeadCore<NonceSize = U12>,
{
    build::<C>(key)?
        .decrypt(GenericArray::from_slice(nonce), body)
        .map_err(|_| CoderError::AuthenticationFailed)
}

/// Encrypt `plaintext` under `key` with a fresh random nonce.
///
/// Returns `nonce ‖ ciphertext ‖ tag`.
pub fn seal(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let nonce = random_nonce_12()?;
    let body = match KeyStrength::from_key_len(key.len())? {
        KeyStrength::Aes128 => seal_with::<Aes128Gcm>(key, &nonce, plaintext)?,
        KeyStrength::Aes192 => seal_with::<Aes192Gcm>(key, &nonce, plaintext)?,
        KeyStrength::Aes256 => seal_with::<Aes256Gcm>(key, &nonce, plaintext)?,
    };

    let mut payload = Vec::with_capacity(NONCE_SIZE + body.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&body);
    Ok(payload)
}

/// Split `payload` into nonce and body and authenticate-decrypt it.
///
/// # Errors
///
/// `MalformedInput` if the payload is shorter than a nonce,
/// `AuthenticationFailed` for any tag mismatch (tampering, truncation,
/// wrong key).
pub fn open(key: &[u8], payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() < NONCE_SIZE {
        return Err(CoderError::MalformedInput(format!(
            "payload is {} bytes, shorter than the {NONCE_SIZE} byte nonce",
            payload.len()
        )));
    }
    let (nonce, body) = payload.split_at(NONCE_SIZE);

    match KeyStrength::from_key_len(key.len())? {
        KeyStrength::Aes128 => open_with::<Aes128Gcm>(key, nonce, body),
        KeyStrength::Aes192 => open_with::<Aes192Gcm>(key, nonce, body),
        KeyStrength::Aes256 => open_with::<Aes256Gcm>(key, nonce, body),
    }
}
