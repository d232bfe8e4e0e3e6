//! Error types for sha512-hasher

use thiserror::Error;

/// Result type alias for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

/// Hashing error types
///
/// Verification never produces one of these: a digest that does not match,
/// for whatever reason, is simply `false`.
#[derive(Error, Debug)]
pub enum HashError {
    #[error("Secure random source unavailable: {0}")]
    RandomSource(String),

    #[error("Invalid hasher parameters: {0}")]
    InvalidParams(String),

    #[error("Invalid hasher configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<rand::Error> for HashError {
    fn from(err: rand::Error) -> Self {
        HashError::RandomSource(err.to_string())
    }
}
