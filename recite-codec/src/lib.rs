//! Base-2048 binary-to-text codec
//!
//! Packs arbitrary bytes into printable symbols, 11 bits per symbol, drawn
//! from a contiguous block of 2048 code points starting at `U+1F300`. The
//! decoder works incrementally and hands back bounded byte chunks so callers
//! can feed a streaming decompressor without materializing the whole payload.
//!
//! ```
//! use recite_codec::{decode, encode};
//!
//! let symbols = encode(b"hi");
//! assert_eq!(symbols.chars().count(), 2);
//!
//! let bytes = decode(&symbols).unwrap();
//! assert!(bytes.starts_with(b"hi"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod alphabet;
pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod error;

pub use alphabet::{index_of, symbol_for, validate, ALPHABET_SIZE, BASE, SYMBOL_BITS};
pub use bits::BitAccumulator;
pub use decoder::{decode, ChunkedDecoder, DEFAULT_CHUNK_BYTES};
pub use encoder::{encode, encoded_len};
pub use error::{CodecError, Result};
