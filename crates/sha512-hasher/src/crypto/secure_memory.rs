//! Work buffers that are zeroed when dropped
//!
//! Both buffers hold secret-derived material while a digest is computed.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Concatenation of a secret and its salt - automatically zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SaltedSecret {
    bytes: Vec<u8>,
}

impl SaltedSecret {
    /// Build `secret || salt`
    pub fn new(secret: &[u8], salt: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(secret.len() + salt.len());
        bytes.extend_from_slice(secret);
        bytes.extend_from_slice(salt);
        Self { bytes }
    }

    /// Get the concatenated bytes (use carefully - avoid copying)
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for SaltedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltedSecret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Lowercase hex digest of the latest stretch round - automatically zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop, Default)]
pub struct HexDigest {
    value: String,
}

impl HexDigest {
    /// Replace the current value with the hex encoding of `digest`
    pub fn replace(&mut self, digest: &[u8]) {
        self.value.zeroize();
        self.value = hex::encode(digest);
    }

    /// Get the hex string (use carefully)
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the hex string as bytes, the input of the next round
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for HexDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HexDigest")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salted_secret_concatenates() {
        let seed = SaltedSecret::new(b"secret", b"salt");
        assert_eq!(seed.as_bytes(), b"secretsalt");
    }

    #[test]
    fn test_salted_secret_empty_secret() {
        let seed = SaltedSecret::new(b"", b"salt");
        assert_eq!(seed.as_bytes(), b"salt");
    }

    #[test]
    fn test_hex_digest_replace() {
        let mut digest = HexDigest::default();
        assert!(digest.is_empty());

        digest.replace(&[0xde, 0xad, 0xBE, 0xEF]);
        assert_eq!(digest.as_str(), "deadbeef");
        assert_eq!(digest.len(), 8);

        digest.replace(&[0x01]);
        assert_eq!(digest.as_str(), "01");
    }

    #[test]
    fn test_debug_redacted() {
        let seed = SaltedSecret::new(b"hunter2", b"pepper");
        let debug = format!("{:?}", seed);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("hunter2"));

        let mut digest = HexDigest::default();
        digest.replace(&[0xab; 4]);
        let debug = format!("{:?}", digest);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("abab"));
    }
}
