//! Random one-time codes and alphanumeric secrets.
//!
//! - [`get_random_digits`] draws digits from the thread-local RNG. Use it
//!   for short one-time codes, never for key material.
//! - [`get_secret`] hex-encodes OS entropy and keeps the alphanumeric
//!   characters, topping up from OS entropy if the result falls short.

pub mod charset;
pub mod random;

use rand::Rng;
use zeroize::Zeroizing;

use crate::error::Result;
use charset::{is_secret_char, DIGIT_CHARSET, SECRET_CHARSET};
use random::{random_vec, secure_index};

/// Generate a string of exactly `length` random digits.
pub fn get_random_digits(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| DIGIT_CHARSET[rng.gen_range(0..DIGIT_CHARSET.len())] as char)
        .collect()
}

/// Generate a secret of exactly `length` alphanumeric characters.
///
/// # Errors
///
/// Returns `CoderError::RandomSource` if the OS entropy source fails.
pub fn get_secret(length: usize) -> Result<String> {
    let entropy = Zeroizing::new(random_vec(length)?);
    let encoded = Zeroizing::new(hex::encode(entropy.as_slice()));

    let mut secret: String = encoded.chars().filter(|&c| is_secret_char(c)).collect();

    if secret.len() < length {
        log::debug!(
            "secret short by {} chars after filtering, padding",
            length - secret.len()
        );
    }
    while secret.len() < length {
        secret.push(SECRET_CHARSET[secure_index(SECRET_CHARSET.len())?] as char);
    }

    secret.truncate(length);
    Ok(secret)
}
