//! Byte-to-symbol encoding

use crate::alphabet::{symbol_for, SYMBOL_BITS};
use crate::bits::BitAccumulator;
use alloc::string::String;

/// Number of symbols `encode` produces for `byte_len` input bytes.
pub fn encoded_len(byte_len: usize) -> usize {
    (byte_len * 8).div_ceil(SYMBOL_BITS as usize)
}

/// Encode bytes as base-2048 symbols.
///
/// Bits are packed MSB-first across the whole input. A final partial group
/// of 1 to 10 bits is zero-padded on the low end and still emitted as a
/// full symbol.
pub fn encode(data: &[u8]) -> String {
    // Every symbol is a four-byte UTF-8 sequence
    let mut out = String::with_capacity(encoded_len(data.len()) * 4);
    let mut bits = BitAccumulator::new();

    for &byte in data {
        bits.push(u32::from(byte), 8);
        while let Some(index) = bits.take(SYMBOL_BITS) {
            out.push(symbol_for(index as u16));
        }
    }

    if let Some(index) = bits.drain_padded(SYMBOL_BITS) {
        out.push(symbol_for(index as u16));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::index_of;
    use alloc::vec::Vec;

    fn indices(symbols: &str) -> Vec<u16> {
        symbols.chars().map(|ch| index_of(ch).unwrap()).collect()
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encoded_len(0), 0);
    }

    #[test]
    fn test_encode_single_byte_is_padded() {
        // 0xFF -> 1111_1111 + 000 padding
        assert_eq!(indices(&encode(&[0xFF])), [0b111_1111_1000]);
    }

    #[test]
    fn test_encode_packs_across_bytes() {
        // 0xAB 0xCD -> 10101011110 | 01101 000000
        assert_eq!(
            indices(&encode(&[0xAB, 0xCD])),
            [0b101_0101_1110, 0b011_0100_0000]
        );
    }

    #[test]
    fn test_encoded_len_matches_output() {
        for len in [1usize, 10, 11, 12, 100] {
            let data: Vec<u8> = (0..len as u8).collect();
            assert_eq!(encode(&data).chars().count(), encoded_len(len));
        }
        // 11 bytes = 88 bits = exactly 8 symbols
        assert_eq!(encoded_len(11), 8);
    }
}
