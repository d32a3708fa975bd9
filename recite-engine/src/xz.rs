//! Streaming xz decompression
//!
//! The compression format itself is liblzma's business; this module only
//! adapts it to a "feed bytes in, get bytes out" contract and to the chunk
//! iterators used by the tokenizer.

use crate::error::{EngineError, Result};
use xz2::stream::{Action, Check, Filters, LzmaOptions, Status, Stream};

/// Minimum headroom reserved in the output buffer per `process_vec` call
const OUTPUT_RESERVE: usize = 16 * 1024;

/// Smallest dictionary liblzma accepts
const MIN_DICT_SIZE: u32 = 4096;

/// Dictionary of preset 9, the largest any preset uses
const MAX_DICT_SIZE: u32 = 64 << 20;

/// Stateful decompressor fed successive chunks of one compressed stream.
///
/// Chunks must arrive in order. Once the stream's end marker has been seen
/// the decompressor is finished and ignores any further input.
pub trait Decompressor {
    /// Feed the next compressed chunk and return whatever output it released.
    /// The output may be empty.
    fn decompress(&mut self, input: &[u8]) -> Result<Vec<u8>>;

    /// Whether the end of the compressed stream has been reached
    fn is_finished(&self) -> bool;
}

/// xz (LZMA2) stream decoder
pub struct XzDecompressor {
    stream: Stream,
    finished: bool,
}

impl std::fmt::Debug for XzDecompressor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XzDecompressor")
            .field("total_in", &self.stream.total_in())
            .field("total_out", &self.stream.total_out())
            .field("finished", &self.finished)
            .finish()
    }
}

impl XzDecompressor {
    /// Create a decoder for a single xz stream
    pub fn new() -> Result<Self> {
        let stream = Stream::new_stream_decoder(u64::MAX, 0)?;
        Ok(Self {
            stream,
            finished: false,
        })
    }
}

impl Decompressor for XzDecompressor {
    fn decompress(&mut self, mut input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        if input.is_empty() {
            return Ok(output);
        }

        while !self.finished {
            output.reserve(OUTPUT_RESERVE.max(input.len()));

            let in_before = self.stream.total_in();
            let out_before = output.len();
            let status = self.stream.process_vec(input, &mut output, Action::Run)?;
            let consumed = (self.stream.total_in() - in_before) as usize;
            input = &input[consumed..];

            if matches!(status, Status::StreamEnd) {
                self.finished = true;
                break;
            }
            // A full output buffer may hide pending output even once the
            // input is used up
            if input.is_empty() && output.len() < output.capacity() {
                break;
            }
            if consumed == 0 && output.len() == out_before {
                return Err(EngineError::DecompressStalled);
            }
        }

        Ok(output)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Compress `data` into a single xz stream (CRC64 check, LZMA2 `preset`).
///
/// The dictionary is sized to the input so decoders of small payloads never
/// have to allocate a preset-sized window.
pub fn compress(data: &[u8], preset: u32) -> Result<Vec<u8>> {
    let dict_size = u32::try_from(data.len().next_power_of_two())
        .unwrap_or(MAX_DICT_SIZE)
        .clamp(MIN_DICT_SIZE, MAX_DICT_SIZE);

    let mut options = LzmaOptions::new_preset(preset)?;
    options.dict_size(dict_size);
    let mut filters = Filters::new();
    filters.lzma2(&options);
    let mut stream = Stream::new_stream_encoder(&filters, Check::Crc64)?;

    let mut compressed = Vec::with_capacity(data.len() / 2 + 64);
    let mut input = data;
    loop {
        compressed.reserve(OUTPUT_RESERVE);

        let in_before = stream.total_in();
        let out_before = compressed.len();
        let status = stream.process_vec(input, &mut compressed, Action::Finish)?;
        let consumed = (stream.total_in() - in_before) as usize;
        input = &input[consumed..];

        if matches!(status, Status::StreamEnd) {
            return Ok(compressed);
        }
        if consumed == 0 && compressed.len() == out_before {
            return Err(EngineError::CompressStalled);
        }
    }
}

/// Chunk iterator adapter that runs compressed chunks through a
/// [`Decompressor`].
///
/// Input after the end of the compressed stream is left unread. A
/// decompression error is yielded once and ends the iterator.
#[derive(Debug)]
pub struct Decompressed<I, D> {
    chunks: I,
    decompressor: D,
    failed: bool,
}

impl<I, D> Decompressed<I, D> {
    /// Wrap a compressed chunk source
    pub fn new(chunks: I, decompressor: D) -> Self {
        Self {
            chunks,
            decompressor,
            failed: false,
        }
    }
}

impl<I, D> Iterator for Decompressed<I, D>
where
    I: Iterator<Item = Vec<u8>>,
    D: Decompressor,
{
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.decompressor.is_finished() {
            return None;
        }
        let chunk = self.chunks.next()?;
        match self.decompressor.decompress(&chunk) {
            Ok(output) => Some(Ok(output)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"So long lives this, and this gives life to thee. ";

    fn decompress_all(compressed: &[u8], chunk: usize) -> Vec<u8> {
        let mut decoder = XzDecompressor::new().unwrap();
        compressed
            .chunks(chunk)
            .flat_map(|piece| decoder.decompress(piece).unwrap())
            .collect()
    }

    #[test]
    fn test_compress_then_decompress() {
        let compressed = compress(TEXT, 6).unwrap();
        assert_eq!(decompress_all(&compressed, compressed.len()), TEXT);
    }

    #[test]
    fn test_one_byte_feeding() {
        let text = TEXT.repeat(50);
        let compressed = compress(&text, 9).unwrap();
        assert_eq!(decompress_all(&compressed, 1), text);
    }

    #[test]
    fn test_trailing_garbage_ignored() {
        let mut compressed = compress(TEXT, 6).unwrap();
        compressed.extend_from_slice(&[0, 0]);

        let mut decoder = XzDecompressor::new().unwrap();
        let output = decoder.decompress(&compressed).unwrap();
        assert_eq!(output, TEXT);
        assert!(decoder.is_finished());
        assert!(decoder.decompress(b"more junk").unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_input_is_an_error() {
        let mut decoder = XzDecompressor::new().unwrap();
        let result = decoder.decompress(b"definitely not an xz stream");
        assert!(matches!(result, Err(EngineError::Decompress(_))));
    }

    #[test]
    fn test_decompressed_adapter_stops_after_error() {
        let chunks = vec![b"this is not an xz stream at all".to_vec(), b"more".to_vec()];
        let mut adapter = Decompressed::new(chunks.into_iter(), XzDecompressor::new().unwrap());
        assert!(matches!(adapter.next(), Some(Err(_))));
        assert!(adapter.next().is_none());
    }

    #[test]
    fn test_decompressed_adapter_stops_at_stream_end() {
        let compressed = compress(TEXT, 6).unwrap();
        let chunks = vec![compressed, vec![0xAA; 4]];
        let adapter = Decompressed::new(chunks.into_iter(), XzDecompressor::new().unwrap());
        let outputs: Vec<Vec<u8>> = adapter.map(|chunk| chunk.unwrap()).collect();
        assert_eq!(outputs, vec![TEXT.to_vec()]);
    }
}
