//! Salted SHA-512 password hasher
//!
//! Stored digest format: `{salt}{digest_hex}`
//! - Salt: 21 symbols from [`SALT_ALPHABET`](crate::crypto::SALT_ALPHABET)
//! - Digest: 128 lowercase hex characters, the result of 20 chained SHA-512 rounds
//!
//! Callers persist the stored digest verbatim and treat it as opaque.

use tracing::{debug, warn};

use crate::crypto::{generate_salt, slow_equals, stretch};
use crate::error::Result;
use crate::params::{HasherParams, DEFAULT_SALT_LENGTH, DEFAULT_STRETCHES};

/// Trait for password hashers held by an authentication layer
pub trait PasswordHasher: Send + Sync {
    /// Hash a secret into a fresh stored digest
    fn hash(&self, secret: &[u8]) -> Result<String>;

    /// Check a candidate secret against a stored digest
    ///
    /// Malformed or truncated digests are a mismatch, never an error.
    fn check(&self, secret: &[u8], stored: &str) -> bool;
}

/// SHA-512 hasher with a random salt and a fixed stretch count
///
/// Holds nothing but its parameters; share it freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sha512Hasher {
    params: HasherParams,
}

impl Sha512Hasher {
    /// Create a hasher with the default parameters (21 symbol salt, 20 stretches)
    pub const fn new() -> Self {
        Self {
            params: HasherParams {
                salt_length: DEFAULT_SALT_LENGTH,
                stretches: DEFAULT_STRETCHES,
            },
        }
    }

    /// Create a hasher with custom parameters
    ///
    /// Digests produced this way only verify against a hasher with the same
    /// parameters.
    pub fn with_params(params: HasherParams) -> Result<Self> {
        params.validate()?;

        if params.stretches < DEFAULT_STRETCHES {
            warn!(
                "Hasher configured with {} stretches, below the default of {}",
                params.stretches, DEFAULT_STRETCHES
            );
        }

        Ok(Self { params })
    }

    /// Parameters in use
    pub fn params(&self) -> &HasherParams {
        &self.params
    }

    /// Create a random salt of the configured length
    pub fn create_salt(&self) -> Result<String> {
        generate_salt(self.params.salt_length)
    }
}

impl PasswordHasher for Sha512Hasher {
    fn hash(&self, secret: &[u8]) -> Result<String> {
        let salt = self.create_salt()?;
        let digest = stretch(secret, salt.as_bytes(), self.params.stretches);

        let mut stored = String::with_capacity(self.params.stored_length());
        stored.push_str(&salt);
        stored.push_str(digest.as_str());

        debug!(
            "Hashed secret with {} stretches ({} byte digest)",
            self.params.stretches,
            stored.len()
        );
        Ok(stored)
    }

    fn check(&self, secret: &[u8], stored: &str) -> bool {
        let stored = stored.as_bytes();

        // Work on bytes: a short or non-ASCII digest must not panic on slicing
        let salt = &stored[..stored.len().min(self.params.salt_length)];
        let digest = stretch(secret, salt, self.params.stretches);

        let mut candidate = Vec::with_capacity(salt.len() + digest.len());
        candidate.extend_from_slice(salt);
        candidate.extend_from_slice(digest.as_bytes());

        let matched = slow_equals(&candidate, stored);
        debug!("Checked secret against stored digest: matched={}", matched);
        matched
    }
}

/// Hash a secret with the default parameters
///
/// # Returns
/// A 149 character stored digest. Fails only if the OS random source is
/// unavailable.
pub fn hash(secret: impl AsRef<[u8]>) -> Result<String> {
    Sha512Hasher::new().hash(secret.as_ref())
}

/// Verify a secret against a digest produced by [`hash`]
pub fn verify(secret: impl AsRef<[u8]>, stored: &str) -> bool {
    Sha512Hasher::new().check(secret.as_ref(), stored)
}
