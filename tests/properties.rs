//! Property tests over the padding codec and the full pipeline.

use bulwark_envelope::padding::{pad, unpad};
use bulwark_envelope::{open, seal, MacScope};
use proptest::prelude::*;

proptest! {
    #[test]
    fn pad_output_is_block_aligned(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let padded = pad(&data);
        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() > data.len());
        prop_assert!(padded.len() <= data.len() + 16);
    }

    #[test]
    fn unpad_inverts_pad(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let padded = pad(&data);
        prop_assert_eq!(unpad(&padded).unwrap(), &data[..]);
    }

    #[test]
    fn unpad_never_panics(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = unpad(&data);
    }

    #[test]
    fn roundtrip_all_scopes(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        cipher_key in proptest::collection::vec(any::<u8>(), 32..=32),
        mac_key in proptest::collection::vec(any::<u8>(), 32..=32),
        iv in proptest::collection::vec(any::<u8>(), 16..=16),
        scope_idx in 0usize..3,
    ) {
        let scope = [
            MacScope::CiphertextOnly,
            MacScope::IvThenCiphertext,
            MacScope::PlaintextOnly,
        ][scope_idx];

        let (ct, tag) = seal(&cipher_key, &mac_key, &iv, &data, scope).unwrap();
        prop_assert_eq!(ct.len(), (data.len() / 16 + 1) * 16);
        let pt = open(&cipher_key, &mac_key, &iv, &ct, &tag, scope).unwrap();
        prop_assert_eq!(pt, data);
    }

    #[test]
    fn ciphertext_bit_flips_never_pass(
        data in proptest::collection::vec(any::<u8>(), 1..64),
        flip_byte in any::<prop::sample::Index>(),
        flip_bit in 0u8..8,
    ) {
        let cipher_key = [0x0Au8; 32];
        let mac_key = [0x0Bu8; 32];
        let iv = [0x0Cu8; 16];

        let (ct, tag) = seal(&cipher_key, &mac_key, &iv, &data, MacScope::IvThenCiphertext).unwrap();
        let mut bad = ct.clone();
        let idx = flip_byte.index(bad.len());
        bad[idx] ^= 1 << flip_bit;

        prop_assert!(open(&cipher_key, &mac_key, &iv, &bad, &tag, MacScope::IvThenCiphertext).is_err());
    }
}
