//! bcrypt password hashing.
//!
//! bcrypt only reads the first 72 bytes of its input, so longer inputs are
//! rejected up front rather than silently truncated.

use crate::error::{CoderError, Result};

/// Longest input bcrypt hashes without truncation.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hash `text` with a fresh salt at the given cost.
pub fn hash(text: &str, cost: u32) -> Result<String> {
    if text.len() > MAX_PASSWORD_BYTES {
        return Err(CoderError::InputTooLong {
            len: text.len(),
            max: MAX_PASSWORD_BYTES,
        });
    }
    bcrypt::hash(text, cost).map_err(|e| CoderError::Hashing(e.to_string()))
}

/// Check `text` against a stored bcrypt `hash`.
///
/// A wrong password, a malformed hash, and an over-long candidate all
/// yield the same `HashMismatch`.
pub fn verify(hash: &str, text: &str) -> Result<()> {
    if text.len() > MAX_PASSWORD_BYTES {
        return Err(CoderError::HashMismatch);
    }
    match bcrypt::verify(text, hash) {
        Ok(true) => Ok(()),
        _ => Err(CoderError::HashMismatch),
    }
}
