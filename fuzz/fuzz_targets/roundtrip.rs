#![no_main]

use huffcodec::compress;
use huffcodec::decompress;
use huffcodec::Codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = match std::str::from_utf8(data) {
        Ok(text) if !text.is_empty() => text,
        _ => return,
    };
    let mut codec = Codec::from_text(text).unwrap();
    let bytes = codec.encode_bin(text).unwrap();
    assert_eq!(codec.decode_bin(&bytes).unwrap(), text);
    assert_eq!(decompress(&compress(text).unwrap()).unwrap(), text);
});
