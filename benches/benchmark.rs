extern crate criterion;

use self::criterion::*;
use huffcodec::compress;
use huffcodec::decompress;
use huffcodec::Codec;

const SENTENCE: &str = "a dead dad ceded a bad babe a beaded abaca bed";

/// repeats a few lines of prose until roughly `size` bytes are reached
fn gen_text(size: usize) -> String {
    const LINES: &[&str] = &[
        "The quick brown fox jumps over the lazy dog.\n",
        "Pack my box with five dozen liquor jugs!\n",
        "{\"id\": 42, \"name\": \"huffman\", \"tags\": [\"prefix\", \"code\"]}\n",
        "a dead dad ceded a bad babe a beaded abaca bed\n",
    ];
    let mut text = String::with_capacity(size + 64);
    let mut pos = 0;
    while text.len() < size {
        text.push_str(LINES[pos % LINES.len()]);
        pos += 1;
    }
    text
}

fn compression(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression");
    let inputs = vec![SENTENCE.to_string(), gen_text(1_000), gen_text(34_000), gen_text(65_000)];
    for input in inputs.iter() {
        let input_bytes = input.len() as u64;
        group.throughput(Throughput::Bytes(input_bytes));
        group.bench_with_input(
            BenchmarkId::new("encode_bin", input_bytes),
            &input,
            |b, i| {
                let mut codec = Codec::from_text(i).unwrap();
                b.iter(|| codec.encode_bin(i).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("compress_complete", input_bytes),
            &input,
            |b, i| {
                b.iter(|| compress(i).unwrap());
            },
        );
    }
    group.finish();
}

fn decompression(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression");
    let inputs = vec![SENTENCE.to_string(), gen_text(1_000), gen_text(34_000), gen_text(65_000)];
    for input in inputs.iter() {
        let input_bytes = input.len() as u64;
        group.throughput(Throughput::Bytes(input_bytes));
        let codec = Codec::from_text(input).unwrap();
        let packed = codec.pack(input).unwrap();
        group.bench_with_input(
            BenchmarkId::new("unpack", input_bytes),
            &packed,
            |b, p| {
                b.iter(|| codec.unpack(p).unwrap());
            },
        );
        let container = compress(input).unwrap();
        group.bench_with_input(
            BenchmarkId::new("decompress_complete", input_bytes),
            &container,
            |b, i| {
                b.iter(|| decompress(i).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, compression, decompression);
criterion_main!(benches);
