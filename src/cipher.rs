//! Block-cipher engine: AES-CBC over block-aligned buffers.
//!
//! Thin wrapper over the RustCrypto `aes` + `cbc` primitives. Padding is the
//! codec's job (`crate::padding`), so the mode runs with `NoPadding` and the
//! input must already be a positive multiple of 16 bytes. No authentication
//! happens here; the MAC engine must always be consulted before decrypted
//! output is trusted.

extern crate alloc;
use alloc::vec::Vec;

use aes::{Aes128, Aes256};
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::CryptoError;
use crate::params::{BLOCK_BYTES, CIPHER_KEY_128_BYTES, CIPHER_KEY_256_BYTES, IV_BYTES};

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

fn check_buffers(iv: &[u8], data: &[u8]) -> Result<(), CryptoError> {
    if iv.len() != IV_BYTES {
        return Err(CryptoError::InvalidIvLength);
    }
    if data.is_empty() || data.len() % BLOCK_BYTES != 0 {
        return Err(CryptoError::InvalidInputLength);
    }
    Ok(())
}

/// Encrypt a padded buffer with AES-CBC.
///
/// `padded` must be a positive multiple of 16 bytes (the caller guarantees
/// this via [`crate::padding::pad`]); the key selects AES-128 or AES-256 by
/// length. The IV is not prepended to the output.
pub fn encrypt(key: &[u8], iv: &[u8], padded: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_buffers(iv, padded)?;

    let mut out = alloc::vec![0u8; padded.len()];
    match key.len() {
        CIPHER_KEY_128_BYTES => {
            let enc = Aes128CbcEnc::new_from_slices(key, iv)
                .map_err(|_| CryptoError::InvalidKeyLength)?;
            enc.encrypt_padded_b2b_mut::<NoPadding>(padded, &mut out)
                .map_err(|_| CryptoError::InvalidInputLength)?;
        }
        CIPHER_KEY_256_BYTES => {
            let enc = Aes256CbcEnc::new_from_slices(key, iv)
                .map_err(|_| CryptoError::InvalidKeyLength)?;
            enc.encrypt_padded_b2b_mut::<NoPadding>(padded, &mut out)
                .map_err(|_| CryptoError::InvalidInputLength)?;
        }
        _ => return Err(CryptoError::InvalidKeyLength),
    }
    Ok(out)
}

/// Decrypt a ciphertext with AES-CBC.
///
/// Inverse of [`encrypt`], same length preconditions. Output still carries
/// its PKCS#7 padding; strip it with [`crate::padding::unpad`] only after
/// authentication has succeeded.
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    check_buffers(iv, ciphertext)?;

    let mut out = alloc::vec![0u8; ciphertext.len()];
    match key.len() {
        CIPHER_KEY_128_BYTES => {
            let dec = Aes128CbcDec::new_from_slices(key, iv)
                .map_err(|_| CryptoError::InvalidKeyLength)?;
            dec.decrypt_padded_b2b_mut::<NoPadding>(ciphertext, &mut out)
                .map_err(|_| CryptoError::InvalidInputLength)?;
        }
        CIPHER_KEY_256_BYTES => {
            let dec = Aes256CbcDec::new_from_slices(key, iv)
                .map_err(|_| CryptoError::InvalidKeyLength)?;
            dec.decrypt_padded_b2b_mut::<NoPadding>(ciphertext, &mut out)
                .map_err(|_| CryptoError::InvalidInputLength)?;
        }
        _ => return Err(CryptoError::InvalidKeyLength),
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    // NIST SP 800-38A, F.2.1 (CBC-AES128.Encrypt)
    const NIST_KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
    const NIST_IV: &str = "000102030405060708090a0b0c0d0e0f";
    const NIST_PT: &str = "6bc1bee22e409f96e93d7e117393172a\
                           ae2d8a571e03ac9c9eb76fac45af8e51\
                           30c81c46a35ce411e5fbc1191a0a52ef\
                           f69f2445df4f9b17ad2b417be66c3710";
    const NIST_CT: &str = "7649abac8119b246cee98e9b12e9197d\
                           5086cb9b507219ee95db113a917678b2\
                           73bed6b8e3c1743b7116e69e22229516\
                           3ff1caa1681fac09120eca307586e1a7";

    #[test]
    fn nist_cbc_aes128_vector() {
        let key = hex::decode(NIST_KEY).unwrap();
        let iv = hex::decode(NIST_IV).unwrap();
        let pt = hex::decode(NIST_PT).unwrap();
        let ct = hex::decode(NIST_CT).unwrap();

        assert_eq!(encrypt(&key, &iv, &pt).unwrap(), ct);
        assert_eq!(decrypt(&key, &iv, &ct).unwrap(), pt);
    }

    #[test]
    fn rejects_unaligned_input() {
        let key = [0u8; 32];
        let iv = [0u8; 16];
        assert_eq!(
            encrypt(&key, &iv, &[0u8; 15]),
            Err(CryptoError::InvalidInputLength)
        );
        assert_eq!(
            decrypt(&key, &iv, &[0u8; 17]),
            Err(CryptoError::InvalidInputLength)
        );
        assert_eq!(encrypt(&key, &iv, b""), Err(CryptoError::InvalidInputLength));
    }

    #[test]
    fn rejects_odd_key_sizes() {
        let iv = [0u8; 16];
        let block = [0u8; 16];
        for n in [15usize, 17, 24, 31, 33] {
            assert_eq!(
                encrypt(&vec![0u8; n], &iv, &block),
                Err(CryptoError::InvalidKeyLength)
            );
        }
    }

    #[test]
    fn decrypt_inverts_encrypt_for_both_key_sizes() {
        let iv = [0x22u8; 16];
        let data = [0x5Au8; 64];
        for key in [&[0x01u8; 16][..], &[0x02u8; 32][..]] {
            let ct = encrypt(key, &iv, &data).unwrap();
            assert_eq!(ct.len(), data.len());
            assert_eq!(decrypt(key, &iv, &ct).unwrap(), data);
        }
    }
}
