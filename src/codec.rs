use bitstream::BitString;
use common::{CodecError, Result, Symbol};
use hufftree::{Tree, TreeBuilder};
use log::{debug, trace};
use std::collections::{BTreeMap, HashMap};

/// Bytes produced by packing an encoded text, together with the number of zero bits which fill up
/// the last byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packed {
    pub bytes: Vec<u8>,
    /// 0..=7
    pub padding: u8,
}

impl Packed {
    /// number of code bits, without padding. Zero if the padding exceeds the available bits.
    pub fn num_bits(&self) -> usize {
        (self.bytes.len() << 3).saturating_sub(self.padding as usize)
    }
}

/// Encoder and decoder tables derived from a huffman tree.
#[derive(Debug, Clone)]
pub struct Codec {
    /// symbol to code
    encoder: HashMap<Symbol, BitString>,
    /// code length to (code to symbol)
    decoder: BTreeMap<usize, HashMap<BitString, Symbol>>,
    max_code_length: usize,
    /// filler bits of the last `encode_bin`, consumed by the next `decode_bin`
    padding: Option<u8>,
}

impl Codec {
    pub fn new(tree: &Tree) -> Self {
        let mut codec = Codec {
            encoder: HashMap::new(),
            decoder: BTreeMap::new(),
            max_code_length: 0,
            padding: None,
        };
        codec.build(tree);
        codec
    }

    /// counts the symbols of `text` and builds the codec from the resulting tree
    pub fn from_text(text: &str) -> Result<Self> {
        let tree = TreeBuilder::new(text).tree()?;
        Ok(Codec::new(&tree))
    }

    fn build(&mut self, tree: &Tree) {
        let encoder = &mut self.encoder;
        let decoder = &mut self.decoder;
        tree.walk_leafs(&mut |symbol, _weight, code| {
            encoder.insert(symbol, code.clone());
            decoder
                .entry(code.len())
                .or_insert_with(HashMap::new)
                .insert(code.clone(), symbol);
        });
        self.max_code_length = self.decoder.keys().next_back().copied().unwrap_or(0);
        debug!(
            "codec for {} symbols, code lengths {:?}",
            self.encoder.len(),
            self.decoder.keys().collect::<Vec<_>>()
        );
    }

    pub fn encoder(&self) -> &HashMap<Symbol, BitString> {
        &self.encoder
    }

    pub fn decoder(&self) -> &BTreeMap<usize, HashMap<BitString, Symbol>> {
        &self.decoder
    }

    pub fn code(&self, symbol: Symbol) -> Option<&BitString> {
        self.encoder.get(&symbol)
    }

    pub fn max_code_length(&self) -> usize {
        self.max_code_length
    }

    /// padding count of the last `encode_bin`, if it was not consumed yet
    pub fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// concatenates the codes of all symbols of `text`
    pub fn encode(&self, text: &str) -> Result<BitString> {
        let mut out = BitString::with_capacity(text.len() * 2);
        for symbol in text.chars() {
            let code = self
                .encoder
                .get(&symbol)
                .ok_or(CodecError::UnknownSymbol { symbol })?;
            out.extend_from(code);
        }
        Ok(out)
    }

    /// Reads bits until they form a code and emits its symbol.
    ///
    /// Taking the first match is correct since the codes are prefix free.
    pub fn decode(&self, bits: &BitString) -> Result<String> {
        let mut out = String::new();
        let mut buffer = BitString::with_capacity(self.max_code_length);
        for (position, bit) in bits.iter().enumerate() {
            buffer.push(bit);
            let symbol = self
                .decoder
                .get(&buffer.len())
                .and_then(|codes| codes.get(&buffer));
            if let Some(symbol) = symbol {
                out.push(*symbol);
                buffer.clear();
            } else if buffer.len() >= self.max_code_length {
                return Err(CodecError::Undecodable { position });
            }
        }
        if !buffer.is_empty() {
            // bits left which are not a complete code
            return Err(CodecError::Undecodable {
                position: bits.len(),
            });
        }
        Ok(out)
    }

    /// encodes `text` and packs the bits into bytes
    pub fn pack(&self, text: &str) -> Result<Packed> {
        let (bytes, padding) = self.encode(text)?.pack();
        trace!("packed {} bytes, padding {}", bytes.len(), padding);
        Ok(Packed { bytes, padding })
    }

    pub fn unpack(&self, packed: &Packed) -> Result<String> {
        let bits = BitString::unpack(&packed.bytes, packed.padding)?;
        self.decode(&bits)
    }

    /// Like `pack`, but keeps the padding count in the codec for the next `decode_bin`. A failed
    /// encoding clears the padding count of an earlier call.
    pub fn encode_bin(&mut self, text: &str) -> Result<Vec<u8>> {
        self.padding = None;
        let packed = self.pack(text)?;
        self.padding = Some(packed.padding);
        Ok(packed.bytes)
    }

    /// Unpacks bytes from the last `encode_bin` of this codec. The stored padding count is consumed.
    pub fn decode_bin(&mut self, bytes: &[u8]) -> Result<String> {
        let padding = self.padding.take().ok_or(CodecError::MissingPadding)?;
        self.unpack(&Packed {
            bytes: bytes.to_vec(),
            padding,
        })
    }
}
