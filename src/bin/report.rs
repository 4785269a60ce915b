use clap::Parser;
use huffcodec::{Codec, TreeBuilder};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

const SAMPLE: &str = "a dead dad ceded a bad babe a beaded abaca bed";

/// Builds a huffman code for a text, encodes and decodes it and reports the time spent per stage
#[derive(Parser, Debug)]
#[clap(name = "report")]
struct Opts {
    /// File to encode, the built-in sample sentence is used if omitted
    file: Option<PathBuf>,
    /// Print the huffman tree in graphviz dot format
    #[clap(long)]
    dot: bool,
    /// Print the code of every symbol
    #[clap(short, long)]
    codes: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();
    debug!("{:?}", opts);

    let text = match &opts.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let time0 = Instant::now();
    let tree = TreeBuilder::new(&text).tree()?;
    let time1 = Instant::now();
    let mut codec = Codec::new(&tree);
    let time2 = Instant::now();
    let coded = codec.encode_bin(&text)?;
    let time3 = Instant::now();
    let decoded = codec.decode_bin(&coded)?;
    let time4 = Instant::now();

    let total = (time4 - time0).as_secs_f64();
    let share = |from: Instant, to: Instant| {
        if total > 0.0 {
            100.0 * (to - from).as_secs_f64() / total
        } else {
            0.0
        }
    };

    if opts.dot {
        println!("{}", tree);
    }
    if opts.codes {
        let mut codes = codec.encoder().iter().collect::<Vec<_>>();
        codes.sort_by_key(|(symbol, code)| (code.len(), **symbol));
        for (symbol, code) in codes {
            println!("{:?}\t{}", symbol, code);
        }
    }

    info!("tree building: {:>6.2}%", share(time0, time1));
    info!("codec building: {:>6.2}%", share(time1, time2));
    info!("encoding: {:>6.2}%", share(time2, time3));
    info!("decoding: {:>6.2}%", share(time3, time4));
    info!("total: {:?}", time4 - time0);
    info!("round trip ok: {}", decoded == text);
    let num_chars = text.chars().count();
    info!(
        "ratio: {:.4} ({} bytes for {} characters)",
        compression_ratio(coded.len(), num_chars),
        coded.len(),
        num_chars
    );
    Ok(())
}

/// encoded bytes per character of the text
fn compression_ratio(num_bytes: usize, num_chars: usize) -> f64 {
    num_bytes as f64 / num_chars as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_counts_characters() {
        let text = "ééé";
        let mut codec = Codec::from_text(text).unwrap();
        let coded = codec.encode_bin(text).unwrap();
        assert_eq!(coded.len(), 1);
        assert_eq!(text.len(), 6);
        assert_eq!(compression_ratio(coded.len(), text.chars().count()), 1.0 / 3.0);
    }
}
