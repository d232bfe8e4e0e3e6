//! # sha512-hasher
//!
//! Password hashing primitive for authentication layers:
//! - Salted SHA-512 digests stretched over a fixed round count
//! - Salts drawn from the OS secure random source
//! - Length-constant-time verification
//!
//! ```
//! let stored = sha512_hasher::hash("correct horse").unwrap();
//! assert_eq!(stored.len(), 149);
//! assert!(sha512_hasher::verify("correct horse", &stored));
//! assert!(!sha512_hasher::verify("wrong", &stored));
//! ```

pub mod crypto;
pub mod error;
pub mod params;
mod hasher;

pub use error::{HashError, Result};
pub use hasher::{hash, verify, PasswordHasher, Sha512Hasher};
pub use params::{
    HasherParams, DEFAULT_SALT_LENGTH, DEFAULT_STRETCHES, DIGEST_HEX_LENGTH, MAX_SALT_LENGTH,
    MAX_STRETCHES,
};
pub use crypto::{generate_salt, slow_equals, SALT_ALPHABET};
