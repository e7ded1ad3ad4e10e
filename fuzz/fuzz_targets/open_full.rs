#![no_main]

use libfuzzer_sys::fuzz_target;

use bulwark_envelope::MacScope;

const CIPHER_KEY: [u8; 32] = [0x0A; 32];
const MAC_KEY: [u8; 32] = [0x0B; 32];
const IV: [u8; 16] = [0x0C; 16];

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let scope = match data[0] % 3 {
        0 => MacScope::CiphertextOnly,
        1 => MacScope::IvThenCiphertext,
        _ => MacScope::PlaintextOnly,
    };

    let split = if data.len() > 1 {
        1 + (data[1] as usize) % data.len()
    } else {
        1
    };
    let (ct, tag) = data[1..].split_at(split.min(data.len() - 1));

    let _ = bulwark_envelope::open(&CIPHER_KEY, &MAC_KEY, &IV, ct, tag, scope);
});
