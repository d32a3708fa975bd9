//! Codec error types (deterministic only)

use core::fmt;

/// Errors raised while decoding symbol text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// A character outside the 2048-symbol alphabet
    InvalidSymbol {
        /// The offending character
        ch: char,
        /// Index of the character in the symbol sequence (not a byte offset)
        position: usize,
    },
    /// Chunked decoding was asked for zero-byte chunks
    ZeroChunkSize,
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidSymbol { ch, position } => write!(
                f,
                "invalid symbol U+{:04X} at position {position}",
                *ch as u32
            ),
            CodecError::ZeroChunkSize => write!(f, "chunk size must be at least one byte"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

/// Result type for codec operations
pub type Result<T> = core::result::Result<T, CodecError>;
