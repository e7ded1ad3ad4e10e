//! Fixed parameter sizes and the pre-flight length guard.
//!
//! Every size below is part of the envelope's external contract:
//!   cipher key:  16 (AES-128) or 32 (AES-256) bytes
//!   MAC key:     32 bytes (HMAC-SHA256)
//!   IV:          16 bytes (one AES block)
//!   tag:         8 bytes (truncated HMAC-SHA256 digest)

use crate::error::CryptoError;

/// AES block size. Padding, the IV, and ciphertext lengths are all
/// multiples of this.
pub const BLOCK_BYTES: usize = 16;

/// IV size: one cipher block.
pub const IV_BYTES: usize = BLOCK_BYTES;

/// AES-128 key size.
pub const CIPHER_KEY_128_BYTES: usize = 16;

/// AES-256 key size.
pub const CIPHER_KEY_256_BYTES: usize = 32;

/// HMAC-SHA256 key size.
pub const MAC_KEY_BYTES: usize = 32;

/// Truncated tag size. 64-bit forgery resistance: adequate only for
/// narrow, rate-limited contexts, kept for wire-format compatibility.
pub const TAG_BYTES: usize = 8;

/// Full HMAC-SHA256 digest size before truncation.
pub const MAC_DIGEST_BYTES: usize = 32;

/// Length guard run before any cryptographic operation.
///
/// Pure predicate, no side effects. `seal` and `open` both call this first
/// so no cipher or MAC state is ever built from mis-sized material.
pub fn validate(cipher_key: &[u8], mac_key: &[u8], iv: &[u8]) -> Result<(), CryptoError> {
    if cipher_key.len() != CIPHER_KEY_128_BYTES && cipher_key.len() != CIPHER_KEY_256_BYTES {
        return Err(CryptoError::InvalidKeyLength);
    }
    if mac_key.len() != MAC_KEY_BYTES {
        return Err(CryptoError::InvalidKeyLength);
    }
    if iv.len() != IV_BYTES {
        return Err(CryptoError::InvalidIvLength);
    }
    Ok(())
}
