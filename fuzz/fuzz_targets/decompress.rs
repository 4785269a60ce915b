#![no_main]

use huffcodec::decompress;
use libfuzzer_sys::fuzz_target;

// arbitrary input must be rejected with an error, never panic
fuzz_target!(|data: &[u8]| {
    let _ = decompress(data);
});
