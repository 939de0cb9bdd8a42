//! Sealkit: a small secrets toolkit.
//!
//! Provides AES-GCM encryption with a hex wire format, bcrypt password
//! hashing with verification, and random one-time codes and
//! alphanumeric secrets.
//!
//! ```no_run
//! use sealkit::{Coder, CoderConfig, SymmetricCoder};
//!
//! let secret = sealkit::get_secret(32)?;
//! let coder = SymmetricCoder::new(CoderConfig::new(secret, 10))?;
//!
//! let sealed = coder.encrypt("hello")?;
//! assert_eq!(coder.decrypt(&sealed)?, "hello");
//!
//! let hash = coder.hash("hunter2")?;
//! coder.verify_hash(&hash, "hunter2")?;
//! # Ok::<(), sealkit::CoderError>(())
//! ```

pub mod coder;
pub mod config;
pub mod error;
pub mod generator;

// Re-export primary types
pub use coder::{Coder, KeyStrength, SymmetricCoder};
pub use config::{CoderConfig, DEFAULT_HASH_COST, MAX_HASH_COST, MIN_HASH_COST};
pub use error::{CoderError, Result};
pub use generator::{get_random_digits, get_secret};
