//! Coder configuration.
//!
//! A [`CoderConfig`] carries the encryption secret and the bcrypt cost.
//! It is usually deserialized by the host application's own config layer
//! (environment, file, ...) and handed to [`SymmetricCoder::new`], which
//! validates it. On the wire the secret is plain text and `hash_cost`
//! falls back to [`DEFAULT_HASH_COST`]:
//!
//! ```json
//! { "secret": "0123456789abcdef0123456789abcdef", "hash_cost": 12 }
//! ```
//!
//! [`SymmetricCoder::new`]: crate::coder::SymmetricCoder::new

use std::fmt;

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CoderError, Result};

/// Lowest bcrypt cost accepted.
pub const MIN_HASH_COST: u32 = 4;
/// Highest bcrypt cost accepted.
pub const MAX_HASH_COST: u32 = 31;
/// Cost used when the configuration does not name one.
pub const DEFAULT_HASH_COST: u32 = 10;
/// Secret lengths selecting AES-128, AES-192 and AES-256.
pub const VALID_SECRET_LENGTHS: [usize; 3] = [16, 24, 32];

fn default_hash_cost() -> u32 {
    DEFAULT_HASH_COST
}

/// Secret key material plus bcrypt cost.
///
/// The secret is wiped from memory when the config is dropped.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct CoderConfig {
    /// Encryption secret. Must be 16, 24 or 32 bytes.
    #[serde(default, deserialize_with = "secret_from_text")]
    pub secret: Vec<u8>,

    /// bcrypt cost. Must be in `[4; 31]`.
    #[serde(default = "default_hash_cost")]
    pub hash_cost: u32,
}

impl CoderConfig {
    /// Build a config from raw secret bytes and a cost.
    pub fn new(secret: impl Into<Vec<u8>>, hash_cost: u32) -> Self {
        Self {
            secret: secret.into(),
            hash_cost,
        }
    }

    /// Build a config with the default cost.
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self::new(secret, DEFAULT_HASH_COST)
    }

    /// Check the secret length, then the cost.
    pub fn validate(&self) -> Result<()> {
        if !VALID_SECRET_LENGTHS.contains(&self.secret.len()) {
            return Err(CoderError::InvalidKeyLength(self.secret.len()));
        }
        if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&self.hash_cost) {
            return Err(CoderError::InvalidHashCost(self.hash_cost));
        }
        Ok(())
    }
}

impl fmt::Debug for CoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoderConfig")
            .field("secret", &format_args!("<{} bytes redacted>", self.secret.len()))
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}

fn secret_from_text<'de, D>(deserializer: D) -> std::result::Result<Vec<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    String::deserialize(deserializer).map(String::into_bytes)
}
