//! Symmetric encryption and password hashing behind one coder.
//!
//! A [`SymmetricCoder`] is built once from a validated [`CoderConfig`] and
//! is immutable afterwards, so it can be shared freely across threads.
//!
//! - [`Coder::encrypt`] / [`Coder::decrypt`] use AES-GCM and a hex wire
//!   format (see [`cipher`]).
//! - [`Coder::hash`] / [`Coder::verify_hash`] use bcrypt (see [`password`]).

pub mod cipher;
pub mod password;

use std::fmt;

use zeroize::Zeroizing;

use crate::config::CoderConfig;
use crate::error::{CoderError, Result};

pub use cipher::KeyStrength;

/// Encryption, decryption, and password hashing capabilities.
pub trait Coder: Send + Sync {
    /// Encrypt `text`, returning hex of `nonce ‖ ciphertext ‖ tag`.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Decrypt a hex payload produced by [`Coder::encrypt`].
    fn decrypt(&self, text: &str) -> Result<String>;

    /// Produce a salted bcrypt hash of `text`.
    fn hash(&self, text: &str) -> Result<String>;

    /// Check `text` against a hash produced by [`Coder::hash`].
    fn verify_hash(&self, hash: &str, text: &str) -> Result<()>;
}

/// AES-GCM + bcrypt coder bound to one secret and one cost.
#[derive(Clone)]
pub struct SymmetricCoder {
    secret: Zeroizing<Vec<u8>>,
    strength: KeyStrength,
    cost: u32,
}

impl SymmetricCoder {
    /// Validate `config` and build a coder from it.
    ///
    /// # Errors
    ///
    /// `InvalidKeyLength` if the secret is not 16, 24 or 32 bytes,
    /// `InvalidHashCost` if the cost is outside `[4; 31]`.
    pub fn new(config: CoderConfig) -> Result<Self> {
        config.validate()?;
        let strength = KeyStrength::from_key_len(config.secret.len())?;

        log::debug!(
            "coder configured: aes-{}-gcm, bcrypt cost {}",
            strength.bits(),
            config.hash_cost
        );

        Ok(Self {
            secret: Zeroizing::new(config.secret.clone()),
            strength,
            cost: config.hash_cost,
        })
    }

    /// AES key size selected by the secret.
    pub fn key_strength(&self) -> KeyStrength {
        self.strength
    }

    /// bcrypt cost used by [`Coder::hash`].
    pub fn hash_cost(&self) -> u32 {
        self.cost
    }

    /// Encrypt raw bytes into the hex wire format.
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<String> {
        let payload = cipher::seal(&self.secret, plaintext)?;
        Ok(hex::encode(payload))
    }

    /// Decrypt the hex wire format into raw bytes.
    pub fn decrypt_bytes(&self, text: &str) -> Result<Vec<u8>> {
        let payload = hex::decode(text)
            .map_err(|e| CoderError::MalformedInput(format!("invalid hex: {e}")))?;
        cipher::open(&self.secret, &payload)
    }
}

impl Coder for SymmetricCoder {
    fn encrypt(&self, text: &str) -> Result<String> {
        self.encrypt_bytes(text.as_bytes())
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        let plaintext = self.decrypt_bytes(text)?;
        String::from_utf8(plaintext)
            .map_err(|_| CoderError::MalformedInput("plaintext is not valid UTF-8".into()))
    }

    fn hash(&self, text: &str) -> Result<String> {
        password::hash(text, self.cost)
    }

    fn verify_hash(&self, hash: &str, text: &str) -> Result<()> {
        password::verify(hash, text)
    }
}

impl fmt::Debug for SymmetricCoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricCoder")
            .field("secret", &"<redacted>")
            .field("strength", &self.strength)
            .field("cost", &self.cost)
            .finish()
    }
}
