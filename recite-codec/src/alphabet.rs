//! The 2048-symbol alphabet
//!
//! Symbol `i` is the code point `BASE + i`. The block `U+1F300..=U+1FAFF`
//! holds no surrogates, so every index maps to a valid `char` and back.

use crate::error::{CodecError, Result};

/// First code point of the alphabet
pub const BASE: u32 = 0x1F300;

/// Number of payload bits carried by one symbol
pub const SYMBOL_BITS: u32 = 11;

/// Number of distinct symbols
pub const ALPHABET_SIZE: u32 = 1 << SYMBOL_BITS;

const INDEX_MASK: u16 = (ALPHABET_SIZE - 1) as u16;

/// Map an index in `0..2048` to its symbol.
///
/// Only the low 11 bits of `index` are used.
pub fn symbol_for(index: u16) -> char {
    char::from_u32(BASE + u32::from(index & INDEX_MASK)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Map a symbol back to its index.
///
/// `position` is only used to describe the failure.
pub fn index_at(ch: char, position: usize) -> Result<u16> {
    let code = ch as u32;
    if (BASE..BASE + ALPHABET_SIZE).contains(&code) {
        Ok((code - BASE) as u16)
    } else {
        Err(CodecError::InvalidSymbol { ch, position })
    }
}

/// Map a symbol back to its index.
pub fn index_of(ch: char) -> Result<u16> {
    index_at(ch, 0)
}

/// Check that every character of `symbols` belongs to the alphabet.
///
/// Returns the number of symbols.
pub fn validate(symbols: &str) -> Result<usize> {
    let mut count = 0;
    for (position, ch) in symbols.chars().enumerate() {
        index_at(ch, position)?;
        count += 1;
    }
    Ok(count)
}
