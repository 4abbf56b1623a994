#![no_main]
use libfuzzer_sys::fuzz_target;
use netpbm::{Image, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_width: Some(1 << 12),
        max_height: Some(1 << 12),
        max_pixels: Some(1 << 20),
    };
    // If the input decodes, re-encoding and decoding again must
    // reproduce the image exactly.
    let Ok(decoded) = Image::decode_with_limits(data, &limits) else {
        return;
    };

    let reencoded = decoded.encode();
    let decoded2 = Image::decode(&reencoded).expect("re-encoded data failed to decode");
    assert_eq!(decoded, decoded2, "roundtrip mismatch");
});
