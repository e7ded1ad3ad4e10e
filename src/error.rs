//! Unified error types for the Bulwark envelope.

use core::fmt;

/// Failure modes of the envelope pipeline.
///
/// `open` collapses every post-validation fault (MAC mismatch, malformed
/// ciphertext, bad padding) into [`CryptoError::AuthenticationFailure`] so
/// that a caller cannot distinguish a padding fault from a tag fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoError {
    /// Cipher key is not 16 or 32 bytes, or MAC key is not 32 bytes.
    InvalidKeyLength,
    /// IV is not exactly 16 bytes.
    InvalidIvLength,
    /// Buffer handed to the block cipher is empty or not block-aligned.
    /// Unreachable through `seal`/`open` once padding has run.
    InvalidInputLength,
    /// PKCS#7 padding is structurally invalid.
    PaddingError,
    /// Tag verification or any downstream open step failed.
    AuthenticationFailure,
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::InvalidKeyLength => write!(f, "invalid key length"),
            CryptoError::InvalidIvLength => write!(f, "invalid IV length"),
            CryptoError::InvalidInputLength => write!(f, "invalid input length"),
            CryptoError::PaddingError => write!(f, "invalid padding"),
            CryptoError::AuthenticationFailure => write!(f, "authentication failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CryptoError {}

impl CryptoError {
    /// Normalize an open-path fault into the opaque failure (oracle discipline).
    ///
    /// Parameter-length faults are caller bugs, not attacker-controlled, and
    /// stay distinguishable; everything else becomes `AuthenticationFailure`.
    pub(crate) fn into_opaque(self) -> Self {
        match self {
            CryptoError::InvalidKeyLength | CryptoError::InvalidIvLength => self,
            _ => CryptoError::AuthenticationFailure,
        }
    }
}
