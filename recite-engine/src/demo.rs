//! Demo mode: the embedded, compressed excerpt played on a loop
//!
//! `DEMO_PAYLOAD` was produced offline with [`build_payload`] from
//! [`demo_text`] (xz preset 9, 64 KiB dictionary, CRC64) and is baked into
//! the binary. Each pass decodes and decompresses it from scratch.

use crate::config::StreamConfig;
use crate::error::Result;
use crate::passes::{PassSource, Restarting};
use crate::tokenizer::Words;
use crate::xz::{compress, Decompressed, XzDecompressor};
use recite_codec::{encode, validate, ChunkedDecoder};
use std::sync::Arc;

/// One copy of the demo excerpt
pub const DEMO_EXCERPT: &str = "Shall I compare thee to a summer's day? Thou art more lovely and more temperate; \
Rough winds do shake the darling buds of May, and summer's lease hath all too short a date. \
So long lives this, and this gives life to thee. ";

/// Number of excerpt copies in the compressed demo text
pub const DEMO_REPEAT: usize = 20;

/// xz-compressed demo text, base-2048 encoded
pub const DEMO_PAYLOAD: &str = include_str!("../assets/demo_payload.txt");

/// The uncompressed text behind `DEMO_PAYLOAD`
pub fn demo_text() -> String {
    DEMO_EXCERPT.repeat(DEMO_REPEAT)
}

/// Compress `text` and encode it as a demo payload
pub fn build_payload(text: &[u8], preset: u32) -> Result<String> {
    Ok(encode(&compress(text, preset)?))
}

/// Words of one demo pass
pub type DemoPass = Words<Decompressed<ChunkedDecoder<Arc<str>>, XzDecompressor>>;

/// Pass source over an encoded, xz-compressed payload
#[derive(Debug, Clone)]
pub struct DemoSource {
    payload: Arc<str>,
    chunk_bytes: usize,
}

impl DemoSource {
    /// Source over the embedded payload
    pub fn embedded(config: &StreamConfig) -> Self {
        Self {
            payload: Arc::from(DEMO_PAYLOAD),
            chunk_bytes: config.chunk_bytes,
        }
    }

    /// Source over a custom payload, checked up front
    pub fn with_payload(payload: impl Into<Arc<str>>, config: &StreamConfig) -> Result<Self> {
        let payload = payload.into();
        validate(&payload)?;
        Ok(Self {
            payload,
            chunk_bytes: config.chunk_bytes,
        })
    }

    /// The encoded payload
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl PassSource for DemoSource {
    type Pass = DemoPass;

    fn open_pass(&mut self) -> Result<Self::Pass> {
        let decoder = ChunkedDecoder::new(Arc::clone(&self.payload), self.chunk_bytes)?;
        let decompressed = Decompressed::new(decoder, XzDecompressor::new()?);
        Ok(Words::new(decompressed))
    }

    fn name(&self) -> &'static str {
        "demo"
    }

    fn pass_finished(&mut self, pass: &Self::Pass, _emitted: u64) -> Option<Self::Pass> {
        if let Some(err) = pass.error() {
            log::warn!("demo payload pass ended early: {err}");
        }
        None
    }
}

/// Endless word stream over the demo payload
pub type DemoWords = Restarting<DemoSource>;

impl DemoWords {
    /// Stream the embedded payload
    pub fn embedded(config: &StreamConfig) -> Self {
        Restarting::new(DemoSource::embedded(config))
    }
}
