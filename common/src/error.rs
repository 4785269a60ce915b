use thiserror::Error;

use crate::{Symbol, Weight};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("no bucket for key {key}")]
    NotFound { key: Weight },
    #[error("bucket multimap is empty")]
    Empty,
    #[error("symbol {symbol:?} is not present in this code")]
    UnknownSymbol { symbol: Symbol },
    #[error("bit sequence ending at bit {position} matches no code")]
    Undecodable { position: usize },
    #[error("no padding count set, call encode_bin before decode_bin")]
    MissingPadding,
    #[error("padding of {padding} bits is invalid for {available} available bits")]
    InvalidPadding { padding: u8, available: usize },
    #[error("invalid bit character {found:?}, expected '0' or '1'")]
    InvalidBit { found: char },
    #[error("corrupt container: {reason}")]
    Corrupt { reason: &'static str },
}

pub type Result<T> = std::result::Result<T, CodecError>;
