//! Salt generation from the OS secure random source

use rand::{rngs::OsRng, RngCore};

use crate::error::Result;

/// Symbols a salt is drawn from
pub const SALT_ALPHABET: &[u8; 62] =
    b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Largest multiple of the alphabet size that fits in a byte
const REJECTION_BOUND: u8 = 248;

/// Generate a cryptographically secure random salt of `length` symbols
pub fn generate_salt(length: usize) -> Result<String> {
    generate_salt_with(&mut OsRng, length)
}

/// Generate a salt from the given random source
///
/// Bytes at or above [`REJECTION_BOUND`] are discarded so every symbol is
/// equally likely. Errors from the source are returned as is.
pub fn generate_salt_with<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    let mut salt = String::with_capacity(length);
    let mut pool = [0u8; 64];

    while salt.len() < length {
        rng.try_fill_bytes(&mut pool)?;

        for &byte in pool.iter().filter(|&&b| b < REJECTION_BOUND) {
            if salt.len() == length {
                break;
            }
            let index = usize::from(byte) % SALT_ALPHABET.len();
            salt.push(char::from(SALT_ALPHABET[index]));
        }
    }

    Ok(salt)
}
