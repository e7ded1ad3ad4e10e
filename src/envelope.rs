//! Envelope builder / opener: the encrypt-then-authenticate pipeline.
//!
//! `seal` runs validate → pad → encrypt → tag; `open` inverts it with the
//! authentication check in front of decryption. The MAC scope picks which
//! bytes the tag covers and must be agreed out of band; a tag produced
//! under one scope never verifies under another.
//!
//! # The `PlaintextOnly` exception
//!
//! Under [`MacScope::PlaintextOnly`] the tag covers the *unpadded* original
//! plaintext, so it cannot be checked until after decryption. `open`
//! deliberately decrypts and unpads first for this scope only, verifies over
//! the recovered plaintext, and releases nothing on failure. This variant
//! offers **no forgery protection for the ciphertext or IV**: an attacker
//! who can manipulate either learns whether decryption produced the
//! authenticated plaintext. It exists for setups where the plaintext is
//! authenticated out of band before it is ever padded; prefer
//! [`MacScope::IvThenCiphertext`] everywhere else.

extern crate alloc;
use alloc::vec::Vec;

use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::params::{self, TAG_BYTES};
use crate::{cipher, mac, padding};

/// Which bytes the authentication tag covers.
///
/// A configuration value, not derived state: both parties must fix it out of
/// band. See the module docs for the `PlaintextOnly` caveat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacScope {
    /// Tag over the ciphertext alone.
    CiphertextOnly,
    /// Tag over IV followed by ciphertext. The default of the reference
    /// tooling, and the only scope that binds the IV.
    IvThenCiphertext,
    /// Tag over the unpadded plaintext. Verified after decryption.
    PlaintextOnly,
}

fn iv_then_ciphertext(iv: &[u8], ciphertext: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(iv.len() + ciphertext.len());
    buf.extend_from_slice(iv);
    buf.extend_from_slice(ciphertext);
    buf
}

/// Build an envelope: returns `(ciphertext, tag)`.
///
/// The IV is the caller's to supply and must be unique per encryption under
/// a given key; it is carried alongside the envelope, not embedded in it.
/// Deterministic: identical inputs (IV included) produce identical output.
pub fn seal(
    cipher_key: &[u8],
    mac_key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
    scope: MacScope,
) -> Result<(Vec<u8>, [u8; TAG_BYTES]), CryptoError> {
    params::validate(cipher_key, mac_key, iv)?;

    let padded = Zeroizing::new(padding::pad(plaintext));
    let ciphertext = cipher::encrypt(cipher_key, iv, &padded)?;

    let tag = match scope {
        MacScope::CiphertextOnly => mac::tag(mac_key, &ciphertext)?,
        MacScope::IvThenCiphertext => mac::tag(mac_key, &iv_then_ciphertext(iv, &ciphertext))?,
        // Covers the unpadded original, the one scope authenticating
        // pre-padding bytes.
        MacScope::PlaintextOnly => mac::tag(mac_key, plaintext)?,
    };

    Ok((ciphertext, tag))
}

/// Open an envelope: returns the plaintext or an opaque failure.
///
/// For the two encrypt-then-MAC scopes the tag is verified before any
/// decryption runs. Every fault past parameter validation (tag mismatch,
/// malformed ciphertext, bad padding) surfaces as the single
/// [`CryptoError::AuthenticationFailure`], and no partially decrypted data
/// escapes.
pub fn open(
    cipher_key: &[u8],
    mac_key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    tag: &[u8],
    scope: MacScope,
) -> Result<Vec<u8>, CryptoError> {
    params::validate(cipher_key, mac_key, iv)?;

    match scope {
        MacScope::CiphertextOnly | MacScope::IvThenCiphertext => {
            let verified = match scope {
                MacScope::CiphertextOnly => mac::verify(mac_key, ciphertext, tag),
                _ => mac::verify(mac_key, &iv_then_ciphertext(iv, ciphertext), tag),
            };
            if !verified {
                return Err(CryptoError::AuthenticationFailure);
            }

            let padded = Zeroizing::new(
                cipher::decrypt(cipher_key, iv, ciphertext).map_err(CryptoError::into_opaque)?,
            );
            let plaintext = padding::unpad(&padded).map_err(CryptoError::into_opaque)?;
            Ok(plaintext.to_vec())
        }
        MacScope::PlaintextOnly => {
            let padded = Zeroizing::new(
                cipher::decrypt(cipher_key, iv, ciphertext).map_err(CryptoError::into_opaque)?,
            );
            let plaintext = padding::unpad(&padded).map_err(CryptoError::into_opaque)?;
            if !mac::verify(mac_key, plaintext, tag) {
                return Err(CryptoError::AuthenticationFailure);
            }
            Ok(plaintext.to_vec())
        }
    }
}
