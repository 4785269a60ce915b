/*!

Bitstream holds sequences of code bits and packs them into bytes.

Bits are packed big-endian within a byte, the first bit of the sequence lands in the most significant
bit of the first byte. The last byte is filled up with zero bits, the number of filler bits is the
padding and has to be known to unpack the sequence again.

Some bit hacks are appplied here, it can be helpful to understand these
Bit Operations:

number of bits  >> 3 == number of bytes

number of bits  & 7 == bits used in the last byte

*/

use common::{CodecError, Result, BITS_PER_BYTE};
use log::trace;

/// An ordered sequence of bits.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(num_bits: usize) -> Self {
        BitString {
            bits: Vec::with_capacity(num_bits),
        }
    }

    #[inline]
    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    /// appends all bits of `other`
    #[inline]
    pub fn extend_from(&mut self, other: &BitString) {
        self.bits.extend_from_slice(&other.bits);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn clear(&mut self) {
        self.bits.clear();
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// true if `self` is a prefix of `other`. Every sequence is a prefix of itself.
    pub fn is_prefix_of(&self, other: &BitString) -> bool {
        other.bits.starts_with(&self.bits)
    }

    /// number of zero bits needed to fill up the last byte
    #[inline]
    pub fn padding(&self) -> u8 {
        ((BITS_PER_BYTE - (self.len() & 7)) & 7) as u8
    }

    /// Packs the bits into bytes and returns them together with the number of filler bits in the last
    /// byte.
    pub fn pack(&self) -> (Vec<u8>, u8) {
        let padding = self.padding();
        let num_bytes = (self.len() + padding as usize) >> 3;
        let mut out = Vec::with_capacity(num_bytes);
        for chunk in self.bits.chunks(BITS_PER_BYTE) {
            let mut byte = 0_u8;
            for (pos, bit) in chunk.iter().enumerate() {
                if *bit {
                    byte |= 0x80 >> pos;
                }
            }
            out.push(byte);
        }
        debug_assert_eq!(out.len(), num_bytes);
        trace!("packed {} bits into {} bytes, padding {}", self.len(), out.len(), padding);
        (out, padding)
    }

    /// Expands `bytes` into bits and strips `padding` filler bits from the end.
    pub fn unpack(bytes: &[u8], padding: u8) -> Result<BitString> {
        let available = bytes.len() * BITS_PER_BYTE;
        if padding as usize >= BITS_PER_BYTE || padding as usize > available {
            return Err(CodecError::InvalidPadding { padding, available });
        }
        let mut bits = Vec::with_capacity(available);
        for byte in bytes {
            for pos in 0..BITS_PER_BYTE {
                bits.push(byte & (0x80 >> pos) != 0);
            }
        }
        bits.truncate(available - padding as usize);
        Ok(BitString { bits })
    }

    /// parses a sequence of '0' and '1' characters
    pub fn parse(text: &str) -> Result<BitString> {
        text.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(CodecError::InvalidBit { found }),
            })
            .collect::<Result<Vec<bool>>>()
            .map(|bits| BitString { bits })
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        BitString { bits }
    }
}

impl std::str::FromStr for BitString {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        BitString::parse(s)
    }
}

impl std::fmt::Display for BitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(text: &str) -> BitString {
        BitString::parse(text).unwrap()
    }

    #[test]
    fn test_padding() {
        assert_eq!(bits("").padding(), 0);
        assert_eq!(bits("1").padding(), 7);
        assert_eq!(bits("1010101").padding(), 1);
        assert_eq!(bits("10101010").padding(), 0);
        assert_eq!(bits("101010101").padding(), 7);
    }

    #[test]
    fn test_pack_big_endian() {
        let (bytes, padding) = bits("10000000").pack();
        assert_eq!(bytes, vec![0b1000_0000]);
        assert_eq!(padding, 0);

        let (bytes, padding) = bits("0000000111").pack();
        assert_eq!(bytes, vec![0b0000_0001, 0b1100_0000]);
        assert_eq!(padding, 6);
    }

    #[test]
    fn test_pack_empty() {
        let (bytes, padding) = BitString::new().pack();
        assert!(bytes.is_empty());
        assert_eq!(padding, 0);
        assert_eq!(BitString::unpack(&[], 0).unwrap(), BitString::new());
    }

    #[test]
    fn test_unpack_strips_padding() {
        let unpacked = BitString::unpack(&[0b0000_0001, 0b1100_0000], 6).unwrap();
        assert_eq!(unpacked.to_string(), "0000000111");
        let unpacked = BitString::unpack(&[0xff], 0).unwrap();
        assert_eq!(unpacked.to_string(), "11111111");
    }

    #[test]
    fn test_unpack_invalid_padding() {
        assert_eq!(
            BitString::unpack(&[0xff], 8),
            Err(CodecError::InvalidPadding {
                padding: 8,
                available: 8
            })
        );
        assert_eq!(
            BitString::unpack(&[], 3),
            Err(CodecError::InvalidPadding {
                padding: 3,
                available: 0
            })
        );
    }

    #[test]
    fn test_pack_keeps_all_lengths() {
        let source = "1101001110001011011";
        for end in 0..=source.len() {
            let original = bits(&source[..end]);
            let (bytes, padding) = original.pack();
            assert_eq!(bytes.len(), (end + 7) / 8);
            assert_eq!(BitString::unpack(&bytes, padding).unwrap(), original);
        }
    }

    #[test]
    fn test_parse_rejects_other_chars() {
        assert_eq!(
            BitString::parse("0120"),
            Err(CodecError::InvalidBit { found: '2' })
        );
        let parsed: BitString = "0110".parse().unwrap();
        assert_eq!(parsed.len(), 4);
    }

    #[test]
    fn test_prefix() {
        assert!(bits("01").is_prefix_of(&bits("0110")));
        assert!(bits("").is_prefix_of(&bits("1")));
        assert!(!bits("11").is_prefix_of(&bits("10")));
        assert!(!bits("0110").is_prefix_of(&bits("01")));
    }
}
