#![no_main]

use libfuzzer_sys::fuzz_target;

use bulwark_envelope::padding::{pad, unpad};

fuzz_target!(|data: &[u8]| {
    // Arbitrary buffers must never panic, and padded buffers must
    // round-trip exactly.
    let _ = unpad(data);

    let padded = pad(data);
    assert_eq!(unpad(&padded).unwrap(), data);
});
