//! Secure random byte generation.
//!
//! Everything here reads the operating system's entropy source through
//! `OsRng`. The fallible variants surface entropy failures as
//! [`CoderError::RandomSource`] instead of panicking.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{CoderError, Result};

/// Fill a buffer with OS entropy, reporting source failures.
pub fn try_fill_random(buf: &mut [u8]) -> Result<()> {
    OsRng.try_fill_bytes(buf)?;
    Ok(())
}

/// Generate a fixed-size array of secure random bytes.
pub fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    try_fill_random(&mut buf)?;
    Ok(buf)
}

/// Generate a heap buffer of `len` secure random bytes.
pub fn random_vec(len: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; len];
    try_fill_random(&mut buf)?;
    Ok(buf)
}

/// Generate a random 12-byte nonce (for AES-GCM).
pub fn random_nonce_12() -> Result<[u8; 12]> {
    random_bytes()
}

/// Pick an index in `0..bound` from OS entropy, without modulo bias.
///
/// `bound` must be non-zero and fit in a `u32`.
pub fn secure_index(bound: usize) -> Result<usize> {
    let bound = u32::try_from(bound)
        .ok()
        .filter(|&b| b > 0)
        .ok_or_else(|| CoderError::RandomSource(format!("invalid index bound {bound}")))?;
    // Largest multiple of `bound` that fits; draws at or above it are rejected.
    let zone = u32::MAX - (u32::MAX % bound);
    loop {
        let draw = u32::from_le_bytes(random_bytes::<4>()?);
        if draw < zone {
            return Ok((draw % bound) as usize);
        }
    }
}
