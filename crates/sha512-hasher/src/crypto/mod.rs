//! Cryptographic primitives for password digests
//!
//! This module provides:
//! - Salt generation from the OS secure random source
//! - Iterated hex-chained SHA-512 stretching
//! - Length-constant-time comparison
//! - Zeroize-on-drop work buffers

mod constant_time;
mod salt;
mod secure_memory;
mod stretch;

pub use constant_time::{compare, slow_equals, Comparison};
pub use salt::{generate_salt, generate_salt_with, SALT_ALPHABET};
pub use secure_memory::{HexDigest, SaltedSecret};
pub use stretch::stretch;
