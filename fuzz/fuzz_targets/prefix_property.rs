#![no_main]

use huffcodec::TreeBuilder;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if data.len() == 0 {
		return;
	}
    let text = String::from_utf8_lossy(data);
    let tree = TreeBuilder::new(&text).tree().unwrap();
    let mut codes = vec![];
    tree.walk_leafs(&mut |symbol, _weight, code| codes.push((symbol, code.clone())));
    for (symbol, code) in &codes {
        for (other_symbol, other_code) in &codes {
            if symbol != other_symbol && code.is_prefix_of(other_code) {
                panic!("invalid prefix detected between {:?} and {:?}", symbol, other_symbol);
            }
        }
    }
});
