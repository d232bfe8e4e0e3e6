//! Hasher parameters
//!
//! The default parameters are the stored-digest contract: a 21 symbol salt
//! and 20 SHA-512 stretches. Digests produced with other parameters only
//! verify against a hasher built with the same parameters.

use serde::{Deserialize, Serialize};

use crate::error::{HashError, Result};

/// Salt length of the default contract, in symbols
pub const DEFAULT_SALT_LENGTH: usize = 21;

/// Stretch count of the default contract
pub const DEFAULT_STRETCHES: u32 = 20;

/// Length of the lowercase hex encoding of a SHA-512 output
pub const DIGEST_HEX_LENGTH: usize = 128;

/// Upper bound accepted for custom salt lengths
pub const MAX_SALT_LENGTH: usize = 256;

/// Upper bound accepted for custom stretch counts
pub const MAX_STRETCHES: u32 = 5_000_000;

/// Parameters for salted SHA-512 stretching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HasherParams {
    /// Number of salt symbols prefixed to every stored digest (default: 21)
    pub salt_length: usize,
    /// Number of SHA-512 rounds (default: 20)
    pub stretches: u32,
}

impl Default for HasherParams {
    fn default() -> Self {
        Self {
            salt_length: DEFAULT_SALT_LENGTH,
            stretches: DEFAULT_STRETCHES,
        }
    }
}

impl HasherParams {
    /// Create validated parameters
    pub fn new(salt_length: usize, stretches: u32) -> Result<Self> {
        let params = Self {
            salt_length,
            stretches,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parse parameters from JSON, e.g. `{"stretches": 5000}`
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Check that the parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.salt_length == 0 || self.salt_length > MAX_SALT_LENGTH {
            return Err(HashError::InvalidParams(format!(
                "salt length must be between 1 and {}, got {}",
                MAX_SALT_LENGTH, self.salt_length
            )));
        }
        if self.stretches == 0 || self.stretches > MAX_STRETCHES {
            return Err(HashError::InvalidParams(format!(
                "stretches must be between 1 and {}, got {}",
                MAX_STRETCHES, self.stretches
            )));
        }
        Ok(())
    }

    /// Length of every digest produced with these parameters
    pub const fn stored_length(&self) -> usize {
        self.salt_length + DIGEST_HEX_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = HasherParams::default();
        assert_eq!(params.salt_length, 21);
        assert_eq!(params.stretches, 20);
        assert_eq!(params.stored_length(), 149);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_new_rejects_zero_values() {
        assert!(matches!(
            HasherParams::new(0, 20),
            Err(HashError::InvalidParams(_))
        ));
        assert!(matches!(
            HasherParams::new(21, 0),
            Err(HashError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_new_rejects_out_of_range_values() {
        assert!(HasherParams::new(MAX_SALT_LENGTH + 1, 20).is_err());
        assert!(HasherParams::new(21, MAX_STRETCHES + 1).is_err());
        assert!(HasherParams::new(MAX_SALT_LENGTH, MAX_STRETCHES).is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let params = HasherParams::from_json(r#"{"stretches": 5000}"#).unwrap();
        assert_eq!(params.salt_length, DEFAULT_SALT_LENGTH);
        assert_eq!(params.stretches, 5000);
    }

    #[test]
    fn test_from_json_camel_case() {
        let params = HasherParams::from_json(r#"{"saltLength": 32, "stretches": 100}"#).unwrap();
        assert_eq!(params, HasherParams::new(32, 100).unwrap());
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let params = HasherParams::from_json("{}").unwrap();
        assert_eq!(params, HasherParams::default());
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            HasherParams::from_json("not json"),
            Err(HashError::Config(_))
        ));
        assert!(matches!(
            HasherParams::from_json(r#"{"stretches": 0}"#),
            Err(HashError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_string(&HasherParams::default()).unwrap();
        assert!(json.contains("\"saltLength\":21"));
        assert!(json.contains("\"stretches\":20"));
    }
}
