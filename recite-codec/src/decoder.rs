//! Streaming symbol-to-byte decoding
//!
//! [`ChunkedDecoder`] walks the symbol text lazily and yields bytes in chunks
//! of at most `chunk_bytes`, so a payload of any size is never decoded in one
//! piece.
//!
//! Decoding is slightly lossy at the very end: the low padding bits the
//! encoder added to its last symbol come back as one or two zero bytes after
//! the original data. Consumers such as xz stop at their own end marker and
//! ignore them.

use crate::alphabet::{index_at, validate, SYMBOL_BITS};
use crate::bits::BitAccumulator;
use crate::error::{CodecError, Result};
use alloc::vec::Vec;

/// Default chunk size for streaming decode (4KB)
pub const DEFAULT_CHUNK_BYTES: usize = 4096;

/// Lazy decoder from symbol text to bounded byte chunks.
///
/// The symbol source is anything that derefs to `str`, so the decoder can own
/// an `Arc<str>` or `String` as well as borrow a `&str`.
#[derive(Debug, Clone)]
pub struct ChunkedDecoder<S> {
    symbols: S,
    /// Byte offset of the next unread symbol
    cursor: usize,
    /// Symbols consumed so far
    position: usize,
    bits: BitAccumulator,
    chunk_bytes: usize,
    finished: bool,
}

impl<S: AsRef<str>> ChunkedDecoder<S> {
    /// Create a decoder after checking every symbol up front.
    ///
    /// # Errors
    /// - `CodecError::ZeroChunkSize` if `chunk_bytes` is zero
    /// - `CodecError::InvalidSymbol` for the first character outside the alphabet
    pub fn new(symbols: S, chunk_bytes: usize) -> Result<Self> {
        if chunk_bytes == 0 {
            return Err(CodecError::ZeroChunkSize);
        }
        validate(symbols.as_ref())?;

        Ok(Self {
            symbols,
            cursor: 0,
            position: 0,
            bits: BitAccumulator::new(),
            chunk_bytes,
            finished: false,
        })
    }

    /// Maximum size of a yielded chunk
    pub fn chunk_bytes(&self) -> usize {
        self.chunk_bytes
    }

    /// Number of symbols consumed so far
    pub fn symbols_read(&self) -> usize {
        self.position
    }

    fn next_index(&mut self) -> Option<u16> {
        let ch = self.symbols.as_ref()[self.cursor..].chars().next()?;
        let index = index_at(ch, self.position).ok()?;
        self.cursor += ch.len_utf8();
        self.position += 1;
        Some(index)
    }
}

impl<S: AsRef<str>> Iterator for ChunkedDecoder<S> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let mut chunk = Vec::with_capacity(self.chunk_bytes);
        loop {
            while chunk.len() < self.chunk_bytes {
                match self.bits.take(8) {
                    Some(byte) => chunk.push(byte as u8),
                    None => break,
                }
            }
            if chunk.len() == self.chunk_bytes {
                return Some(chunk);
            }

            match self.next_index() {
                Some(index) => self.bits.push(u32::from(index), SYMBOL_BITS),
                None => {
                    self.finished = true;
                    if let Some(byte) = self.bits.drain_padded(8) {
                        chunk.push(byte as u8);
                    }
                    return (!chunk.is_empty()).then_some(chunk);
                }
            }
        }
    }
}

/// Decode a whole symbol string into bytes.
pub fn decode(symbols: &str) -> Result<Vec<u8>> {
    let decoder = ChunkedDecoder::new(symbols, DEFAULT_CHUNK_BYTES)?;
    Ok(decoder.flatten().collect())
}
