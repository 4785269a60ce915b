/*!
Self describing container around a packed text.

The container carries everything needed to decode it again: the frequency table, from which the
decoder rebuilds exactly the same tree, and the padding count of the last byte.

```text
magic          4 bytes  "HUF1"
padding        u8
num_symbols    u32 LE
symbols        num_symbols * (scalar value u32 LE, frequency u64 LE), ascending by symbol
payload_len    u64 LE
payload        payload_len bytes
```
*/

use crate::codec::{Codec, Packed};
use common::{CodecError, Result, Symbol, Weight};
use hufftree::TreeBuilder;
use log::debug;
use std::collections::BTreeMap;
use std::convert::TryInto;

pub const MAGIC: &[u8; 4] = b"HUF1";

const SYMBOL_ENTRY_SIZE: usize = 4 + 8;

/// compresses `text` into a self describing container
pub fn compress(text: &str) -> Result<Vec<u8>> {
    let builder = TreeBuilder::new(text);
    let frequencies = builder.frequencies();
    let packed = if frequencies.is_empty() {
        Packed {
            bytes: vec![],
            padding: 0,
        }
    } else {
        Codec::new(&builder.tree()?).pack(text)?
    };

    let mut out = Vec::with_capacity(
        MAGIC.len() + 1 + 4 + frequencies.len() * SYMBOL_ENTRY_SIZE + 8 + packed.bytes.len(),
    );
    out.extend_from_slice(MAGIC);
    out.push(packed.padding);
    out.extend_from_slice(&(frequencies.len() as u32).to_le_bytes());
    for (symbol, weight) in frequencies {
        out.extend_from_slice(&(*symbol as u32).to_le_bytes());
        out.extend_from_slice(&weight.to_le_bytes());
    }
    out.extend_from_slice(&(packed.bytes.len() as u64).to_le_bytes());
    out.extend_from_slice(&packed.bytes);
    debug!(
        "compressed {} bytes into {} bytes ({} symbols)",
        text.len(),
        out.len(),
        frequencies.len()
    );
    Ok(out)
}

/// decompresses a container created by `compress`
pub fn decompress(input: &[u8]) -> Result<String> {
    let mut reader = Reader { input };
    if reader.take(MAGIC.len())? != MAGIC {
        return Err(CodecError::Corrupt {
            reason: "magic bytes missing",
        });
    }
    let padding = reader.take(1)?[0];
    let num_symbols = reader.read_u32()? as usize;
    if num_symbols > reader.input.len() / SYMBOL_ENTRY_SIZE {
        return Err(CodecError::Corrupt {
            reason: "symbol table exceeds input",
        });
    }

    let mut frequencies: BTreeMap<Symbol, Weight> = BTreeMap::new();
    let mut total: Weight = 0;
    for _ in 0..num_symbols {
        let symbol = std::char::from_u32(reader.read_u32()?).ok_or(CodecError::Corrupt {
            reason: "invalid symbol",
        })?;
        let weight = reader.read_u64()?;
        if weight == 0 {
            return Err(CodecError::Corrupt {
                reason: "zero frequency",
            });
        }
        if let Some((last, _)) = frequencies.iter().next_back() {
            if *last >= symbol {
                return Err(CodecError::Corrupt {
                    reason: "symbols not ascending",
                });
            }
        }
        total = total.checked_add(weight).ok_or(CodecError::Corrupt {
            reason: "frequency overflow",
        })?;
        frequencies.insert(symbol, weight);
    }

    let payload_len = reader.read_u64()?;
    if payload_len != reader.input.len() as u64 {
        return Err(CodecError::Corrupt {
            reason: "payload length mismatch",
        });
    }
    let packed = Packed {
        bytes: reader.input.to_vec(),
        padding,
    };

    if frequencies.is_empty() {
        if !packed.bytes.is_empty() || padding != 0 {
            return Err(CodecError::Corrupt {
                reason: "payload without symbols",
            });
        }
        return Ok(String::new());
    }

    let tree = TreeBuilder::from_frequencies(frequencies).tree()?;
    let text = Codec::new(&tree).unpack(&packed)?;
    if text.chars().count() as u64 != total {
        return Err(CodecError::Corrupt {
            reason: "decoded length does not match frequencies",
        });
    }
    Ok(text)
}

struct Reader<'a> {
    input: &'a [u8],
}

impl<'a> Reader<'a> {
    fn take(&mut self, num_bytes: usize) -> Result<&'a [u8]> {
        if self.input.len() < num_bytes {
            return Err(CodecError::Corrupt {
                reason: "unexpected end of input",
            });
        }
        let (head, rest) = self.input.split_at(num_bytes);
        self.input = rest;
        Ok(head)
    }

    fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().map_err(|_| {
            CodecError::Corrupt {
                reason: "unexpected end of input",
            }
        })?))
    }

    fn read_u64(&mut self) -> Result<u64> {
        let bytes = self.take(8)?;
        Ok(u64::from_le_bytes(bytes.try_into().map_err(|_| {
            CodecError::Corrupt {
                reason: "unexpected end of input",
            }
        })?))
    }
}
