//! PKCS#7 padding codec.
//!
//! `pad` always appends between 1 and 16 bytes, each equal to the pad count,
//! so a block-aligned input gains a full block of padding. `unpad` validates
//! the trailing block in constant time: the position of a bad byte must not
//! be observable through timing, or CBC decryption turns into a padding
//! oracle.

extern crate alloc;
use alloc::vec::Vec;

use subtle::{ConstantTimeEq, ConstantTimeGreater};

use crate::error::CryptoError;
use crate::params::BLOCK_BYTES;

/// Pad `data` to a multiple of the block size.
///
/// Output length is always in `(len, len + 16]` and a multiple of 16.
/// Deterministic, no failure mode.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let p = BLOCK_BYTES - data.len() % BLOCK_BYTES;
    let mut out = Vec::with_capacity(data.len() + p);
    out.extend_from_slice(data);
    out.extend(core::iter::repeat(p as u8).take(p));
    out
}

/// Strip PKCS#7 padding from a decrypted buffer.
///
/// Rejects an empty or unaligned buffer, a pad count outside `[1, 16]`, and
/// any trailing byte that disagrees with the pad count. The trailing-block
/// scan has no data-dependent branches.
pub fn unpad(data: &[u8]) -> Result<&[u8], CryptoError> {
    if data.is_empty() || data.len() % BLOCK_BYTES != 0 {
        return Err(CryptoError::PaddingError);
    }

    let block = &data[data.len() - BLOCK_BYTES..];
    let pad = block[BLOCK_BYTES - 1];

    // 1 <= pad <= 16, checked without branching on the value
    let mut valid = pad.ct_gt(&0) & !pad.ct_gt(&(BLOCK_BYTES as u8));

    // Every byte of the final block is inspected. Bytes inside the claimed
    // padding region must equal the pad count; validity accumulates with no
    // early exit.
    for (i, &b) in block.iter().enumerate() {
        let from_end = (BLOCK_BYTES - i) as u8;
        let in_pad = !from_end.ct_gt(&pad); // from_end <= pad
        valid &= !in_pad | b.ct_eq(&pad);
    }

    if bool::from(valid) {
        Ok(&data[..data.len() - pad as usize])
    } else {
        Err(CryptoError::PaddingError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn pad_appends_count_bytes() {
        let padded = pad(b"hello");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[..5], b"hello");
        assert!(padded[5..].iter().all(|&b| b == 0x0b));
    }

    #[test]
    fn pad_aligned_input_gains_full_block() {
        let padded = pad(&[0xAA; 16]);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn pad_empty_input() {
        let padded = pad(b"");
        assert_eq!(padded, [16u8; 16]);
    }

    #[test]
    fn unpad_inverts_pad() {
        for n in 0..=48 {
            let data: Vec<u8> = (0..n as u8).collect();
            assert_eq!(unpad(&pad(&data)).unwrap(), &data[..]);
        }
    }

    #[test]
    fn unpad_rejects_empty_and_unaligned() {
        assert_eq!(unpad(b""), Err(CryptoError::PaddingError));
        assert_eq!(unpad(&[1u8; 15]), Err(CryptoError::PaddingError));
        assert_eq!(unpad(&[1u8; 17]), Err(CryptoError::PaddingError));
    }

    #[test]
    fn unpad_rejects_zero_and_oversized_count() {
        let mut block = [0xAAu8; 16];
        block[15] = 0;
        assert_eq!(unpad(&block), Err(CryptoError::PaddingError));
        block[15] = 17;
        assert_eq!(unpad(&block), Err(CryptoError::PaddingError));
    }

    #[test]
    fn unpad_rejects_inconsistent_region() {
        // claims 4 bytes of padding but one of them is wrong
        let mut block = [0x41u8; 16];
        block[12] = 4;
        block[13] = 4;
        block[14] = 3;
        block[15] = 4;
        assert_eq!(unpad(&block), Err(CryptoError::PaddingError));
    }

    #[test]
    fn unpad_full_block_of_padding() {
        assert_eq!(unpad(&[16u8; 16]).unwrap(), b"");
    }
}
