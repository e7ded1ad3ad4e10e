//! # Bulwark Envelope
//!
//! Authenticated symmetric encryption: AES-CBC over PKCS#7-padded plaintext,
//! authenticated by HMAC-SHA256 truncated to an 8-byte tag.
//!
//! ## Quick Start
//!
//! ```rust
//! use bulwark_envelope::{seal, open, MacScope};
//!
//! let cipher_key = [0x00u8; 32]; // 16 or 32 bytes
//! let mac_key = [0x11u8; 32];    // always 32 bytes
//! let iv = [0x22u8; 16];         // unique per encryption under a key
//!
//! let (ciphertext, tag) =
//!     seal(&cipher_key, &mac_key, &iv, b"hello", MacScope::IvThenCiphertext).unwrap();
//!
//! let plaintext =
//!     open(&cipher_key, &mac_key, &iv, &ciphertext, &tag, MacScope::IvThenCiphertext).unwrap();
//!
//! assert_eq!(plaintext, b"hello");
//! ```
//!
//! ## Security Properties
//!
//! - **Encrypt-then-MAC**: tag verified before decryption under the
//!   `CiphertextOnly` and `IvThenCiphertext` scopes
//! - **Uniform open errors**: padding and tag faults are indistinguishable
//! - **Constant-time comparisons**: tag equality and padding validation have
//!   no data-dependent branches
//! - **Truncated tag**: 8 bytes of the 32-byte digest, 64-bit forgery
//!   resistance, suitable only for rate-limited contexts
//!
//! ## What's NOT Provided
//!
//! - Key management or derivation
//! - IV generation (uniqueness is the caller's contract)
//! - Network transport or storage formats
//! - Any suite beyond AES-CBC + HMAC-SHA256

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/bulwark-envelope/0.1.0")]

extern crate alloc;

// ---------------------------------------------------------------------------
// Internal modules
// ---------------------------------------------------------------------------

mod cipher;
mod envelope;
mod error;
mod mac;
mod params;

// Padding codec needs to be reachable from the property tests and the
// unpad fuzz target but is not considered stable API
#[doc(hidden)]
pub mod padding;

// ---------------------------------------------------------------------------
// Public surface
// ---------------------------------------------------------------------------

pub use envelope::{open, seal, MacScope};
pub use error::CryptoError;
pub use params::{
    BLOCK_BYTES, CIPHER_KEY_128_BYTES, CIPHER_KEY_256_BYTES, IV_BYTES, MAC_KEY_BYTES, TAG_BYTES,
};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
