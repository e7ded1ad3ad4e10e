//! MAC engine: HMAC-SHA256 truncated to an 8-byte tag.
//!
//! The full 32-byte digest is computed and the first [`TAG_BYTES`] bytes are
//! kept. Verification compares over the fixed tag width with
//! `subtle::ConstantTimeEq`; a candidate of the wrong length is an immediate
//! non-match and reveals nothing about where a comparison would diverge.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::CryptoError;
use crate::params::TAG_BYTES;

type HmacSha256 = Hmac<Sha256>;

/// Compute the truncated tag over `data`.
///
/// Deterministic for any well-formed key; the envelope validates the key
/// length before this runs.
pub fn tag(key: &[u8], data: &[u8]) -> Result<[u8; TAG_BYTES], CryptoError> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength)?;
    mac.update(data);
    let digest = mac.finalize().into_bytes();

    let mut out = [0u8; TAG_BYTES];
    out.copy_from_slice(&digest[..TAG_BYTES]);
    Ok(out)
}

/// Recompute the tag over `data` and compare to `candidate` in constant time.
pub fn verify(key: &[u8], data: &[u8], candidate: &[u8]) -> bool {
    if candidate.len() != TAG_BYTES {
        return false;
    }
    match tag(key, data) {
        Ok(expected) => expected.ct_eq(candidate).into(),
        Err(_) => false,
    }
}
