//! Fixed character sets used by the generators.

/// The ten ASCII digits, in the order one-time codes draw from.
pub const DIGIT_CHARSET: &[u8] = b"1234567890";

/// The 62 ASCII alphanumerics: lowercase, uppercase, then digits.
pub const SECRET_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Whether `c` belongs to [`SECRET_CHARSET`].
pub fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}
