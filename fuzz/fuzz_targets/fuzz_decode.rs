#![no_main]
use libfuzzer_sys::fuzz_target;
use netpbm::{Image, Limits};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic; limits keep giant
    // allocations out of the loop.
    let limits = Limits {
        max_width: Some(1 << 12),
        max_height: Some(1 << 12),
        max_pixels: Some(1 << 20),
    };
    let _ = Image::decode_with_limits(data, &limits);
});
