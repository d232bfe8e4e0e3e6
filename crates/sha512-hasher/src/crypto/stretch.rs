//! Iterated SHA-512 stretching
//!
//! Round 1 hashes `secret || salt`. Every later round hashes the 128 byte
//! lowercase hex string of the previous round, not the raw digest bytes.
//! Stored digests depend on this exact chaining.

use sha2::{Digest, Sha512};

use super::secure_memory::{HexDigest, SaltedSecret};

/// Stretch `secret || salt` through `stretches` rounds of SHA-512
///
/// Zero rounds yield an empty digest, which never matches a stored value.
pub fn stretch(secret: &[u8], salt: &[u8], stretches: u32) -> HexDigest {
    let seed = SaltedSecret::new(secret, salt);
    let mut digest = HexDigest::default();

    for round in 0..stretches {
        let next = if round == 0 {
            Sha512::digest(seed.as_bytes())
        } else {
            Sha512::digest(digest.as_bytes())
        };
        digest.replace(&next);
    }

    digest
}
