//! Word-streaming pipeline
//!
//! Turns either the embedded, xz-compressed demo payload or a plain-text
//! corpus file into an endless, pull-based sequence of whitespace-delimited
//! words. Nothing is decoded ahead of demand: each call to `next()` advances
//! the decoder, decompressor and tokenizer only as far as the next word.
//!
//! ```
//! use recite_engine::{stream, Mode};
//!
//! let mut words = stream(Some("demo"));
//! assert_eq!(words.mode(), Mode::Demo);
//! assert_eq!(words.next().as_deref(), Some("Shall"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod corpus;
pub mod demo;
pub mod error;
pub mod mode;
pub mod passes;
pub mod tokenizer;
pub mod xz;

// Re-export key types
pub use config::{StreamConfig, CORPUS_PATH_ENV, DEFAULT_CORPUS_PATH};
pub use corpus::{CorpusSource, CorpusWords, FileChunks, MISSING_CORPUS_MESSAGE};
pub use demo::{build_payload, demo_text, DemoSource, DemoWords, DEMO_EXCERPT, DEMO_PAYLOAD};
pub use error::{EngineError, Result};
pub use mode::{stream, stream_with_config, Mode, WordStream, DEFAULT_MODE, LOSSLESS_PREFIX};
pub use passes::{PassSource, Restarting};
pub use tokenizer::{WordSplitter, Words};
pub use xz::{compress, Decompressed, Decompressor, XzDecompressor};
