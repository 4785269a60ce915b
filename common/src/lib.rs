/*!
Shared building blocks of the codec: the symbol and weight types, the error type and the
bucket multimap which drives the greedy tree merge.
*/

mod bucket;
mod error;

pub use bucket::BucketMultimap;
pub use error::{CodecError, Result};

/// A symbol of the coded alphabet, a single character
pub type Symbol = char;

/// Number of occurences of a symbol, or the combined count of a subtree
pub type Weight = u64;

pub const BITS_PER_BYTE: usize = 8;
