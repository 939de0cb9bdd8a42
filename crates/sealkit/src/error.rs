//! Error types for sealkit.
//!
//! All errors are strongly typed and propagated without panicking.
//! Key material, plaintext, and stored hashes never appear in error messages.

/// Error types covering configuration, sealing, hashing, and generation.
#[derive(Debug, thiserror::Error)]
pub enum CoderError {
    #[error("Invalid key length: secret must be 16, 24 or 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("Invalid hash cost: must be in range [4; 31], got {0}")]
    InvalidHashCost(u32),

    #[error("Cipher construction failed: {0}")]
    CipherConstruction(String),

    #[error("Random source failure: {0}")]
    RandomSource(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Input too long: {len} bytes exceeds the {max} byte limit")]
    InputTooLong { len: usize, max: usize },

    #[error("Hash mismatch")]
    HashMismatch,

    #[error("Hashing failed: {0}")]
    Hashing(String),
}

impl CoderError {
    /// Whether this error was raised while validating a configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CoderError::InvalidKeyLength(_) | CoderError::InvalidHashCost(_)
        )
    }
}

impl From<rand_core::Error> for CoderError {
    fn from(e: rand_core::Error) -> Self {
        CoderError::RandomSource(e.to_string())
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, CoderError>;
