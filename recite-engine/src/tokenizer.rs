//! Incremental whitespace tokenizer over byte chunks
//!
//! Chunk boundaries fall anywhere: inside a word, inside whitespace, or in the
//! middle of a multi-byte UTF-8 sequence. [`WordSplitter`] carries just enough
//! state across chunks to handle all three:
//!
//! - the *tail*, a word prefix that reached the end of a chunk and may
//!   continue in the next one
//! - the *carry*, up to three bytes of an incomplete UTF-8 sequence
//!
//! Invalid UTF-8 is replaced with U+FFFD and never stops the stream.

use crate::error::{EngineError, Result};
use std::collections::VecDeque;

/// Per-chunk word splitting state
#[derive(Debug, Default, Clone)]
pub struct WordSplitter {
    tail: String,
    carry: Vec<u8>,
}

impl WordSplitter {
    /// Create a splitter with no held state
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize the next chunk, appending every word known to be complete.
    ///
    /// Empty chunks are ignored and leave the tail untouched.
    pub fn push(&mut self, chunk: &[u8], words: &mut VecDeque<String>) {
        if chunk.is_empty() {
            return;
        }

        let mut text = std::mem::take(&mut self.tail);
        self.decode_into(chunk, &mut text);
        if text.is_empty() {
            return;
        }

        let ends_mid_word = text.chars().next_back().is_some_and(|c| !c.is_whitespace());
        let mut parts: Vec<&str> = text.split_whitespace().collect();
        let held = if ends_mid_word { parts.pop() } else { None };

        words.extend(parts.into_iter().map(str::to_owned));
        if let Some(fragment) = held {
            self.tail = fragment.to_owned();
        }
    }

    /// Flush held state at end of input, appending the final words.
    pub fn finish(&mut self, words: &mut VecDeque<String>) {
        let mut text = std::mem::take(&mut self.tail);
        if !self.carry.is_empty() {
            text.push_str(&String::from_utf8_lossy(&self.carry));
            self.carry.clear();
        }
        words.extend(text.split_whitespace().map(str::to_owned));
    }

    /// The word prefix currently held across chunks
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Whether bytes of an incomplete UTF-8 sequence are being held
    pub fn has_carry(&self) -> bool {
        !self.carry.is_empty()
    }

    /// Decode `chunk` after any carried bytes, replacing invalid sequences and
    /// keeping an incomplete trailing sequence for the next chunk.
    fn decode_into(&mut self, chunk: &[u8], text: &mut String) {
        let mut bytes = std::mem::take(&mut self.carry);
        bytes.extend_from_slice(chunk);

        let mut rest = bytes.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    text.push_str(valid);
                    return;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    text.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(invalid) => {
                            text.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[invalid..];
                        }
                        None => {
                            self.carry = after.to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }
}

/// Word iterator over a chunk source.
///
/// The source yields `Result` chunks. An error ends the sequence after the
/// held tail is flushed; it is logged and kept for [`Words::error`].
#[derive(Debug)]
pub struct Words<I> {
    chunks: I,
    splitter: WordSplitter,
    ready: VecDeque<String>,
    drained: bool,
    error: Option<EngineError>,
}

impl<I> Words<I>
where
    I: Iterator<Item = Result<Vec<u8>>>,
{
    /// Tokenize the given chunk source
    pub fn new(chunks: I) -> Self {
        Self {
            chunks,
            splitter: WordSplitter::new(),
            ready: VecDeque::new(),
            drained: false,
            error: None,
        }
    }

    /// The error that ended the chunk source early, if any
    pub fn error(&self) -> Option<&EngineError> {
        self.error.as_ref()
    }
}

impl<I> Iterator for Words<I>
where
    I: Iterator<Item = Result<Vec<u8>>>,
{
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            if let Some(word) = self.ready.pop_front() {
                return Some(word);
            }
            if self.drained {
                return None;
            }

            match self.chunks.next() {
                Some(Ok(chunk)) => self.splitter.push(&chunk, &mut self.ready),
                Some(Err(err)) => {
                    log::debug!("word source ended early: {err}");
                    self.error = Some(err);
                    self.splitter.finish(&mut self.ready);
                    self.drained = true;
                }
                None => {
                    self.splitter.finish(&mut self.ready);
                    self.drained = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_chunks(chunks: &[&[u8]]) -> Vec<String> {
        let mut splitter = WordSplitter::new();
        let mut words = VecDeque::new();
        for chunk in chunks {
            splitter.push(chunk, &mut words);
        }
        splitter.finish(&mut words);
        words.into()
    }

    #[test]
    fn test_word_straddling_chunks() {
        assert_eq!(
            split_chunks(&[b"hello wor", b"ld foo"]),
            ["hello", "world", "foo"]
        );
    }

    #[test]
    fn test_words_emitted_before_end_of_input() {
        let mut splitter = WordSplitter::new();
        let mut words = VecDeque::new();

        splitter.push(b"hello wor", &mut words);
        assert_eq!(words, ["hello"]);
        assert_eq!(splitter.tail(), "wor");

        splitter.push(b"ld foo", &mut words);
        assert_eq!(words, ["hello", "world"]);
        assert_eq!(splitter.tail(), "foo");
    }

    #[test]
    fn test_whitespace_only_chunk() {
        let mut splitter = WordSplitter::new();
        let mut words = VecDeque::new();

        splitter.push(b" ", &mut words);
        assert!(words.is_empty());
        assert_eq!(splitter.tail(), "");

        splitter.push(b"ab", &mut words);
        assert_eq!(splitter.tail(), "ab");
        splitter.push(b" ", &mut words);
        assert_eq!(words, ["ab"]);
        assert_eq!(splitter.tail(), "");
    }

    #[test]
    fn test_empty_chunk_keeps_tail() {
        let mut splitter = WordSplitter::new();
        let mut words = VecDeque::new();
        splitter.push(b"par", &mut words);
        splitter.push(b"", &mut words);
        assert_eq!(splitter.tail(), "par");
        splitter.push(b"tial\n", &mut words);
        assert_eq!(words, ["partial"]);
    }

    #[test]
    fn test_whitespace_runs_and_kinds() {
        assert_eq!(
            split_chunks(&[b"  one\t\ttwo\r\n", b"\n three  "]),
            ["one", "two", "three"]
        );
    }

    #[test]
    fn test_no_normalization() {
        assert_eq!(
            split_chunks(&[b"Thou ART summer's", b" day?"]),
            ["Thou", "ART", "summer's", "day?"]
        );
    }

    #[test]
    fn test_final_tail_flushed() {
        assert_eq!(split_chunks(&[b"last wo", b"rd"]), ["last", "word"]);
    }

    #[test]
    fn test_multibyte_char_split_across_chunks() {
        let text = "caf\u{e9} na\u{ef}ve";
        let bytes = text.as_bytes();
        // Split inside the two-byte encoding of 'é'
        let (first, second) = bytes.split_at(4);
        assert_eq!(split_chunks(&[first, second]), ["caf\u{e9}", "na\u{ef}ve"]);
    }

    #[test]
    fn test_four_byte_char_split_three_ways() {
        let bytes = "\u{1F300}!".as_bytes();
        assert_eq!(
            split_chunks(&[&bytes[..1], &bytes[1..3], &bytes[3..]]),
            ["\u{1F300}!"]
        );
    }

    #[test]
    fn test_invalid_bytes_replaced() {
        assert_eq!(
            split_chunks(&[b"ok \xFF\xFEbad", b" fine"]),
            ["ok", "\u{FFFD}\u{FFFD}bad", "fine"]
        );
    }

    #[test]
    fn test_dangling_carry_at_end_becomes_replacement() {
        assert_eq!(split_chunks(&[b"word \xE2\x82"]), ["word", "\u{FFFD}"]);
    }

    #[test]
    fn test_carry_only_chunk_holds_state() {
        let mut splitter = WordSplitter::new();
        let mut words = VecDeque::new();
        splitter.push(b"\xC3", &mut words);
        assert!(splitter.has_carry());
        assert!(words.is_empty());
        splitter.push(b"\xA9 ", &mut words);
        assert!(!splitter.has_carry());
        assert_eq!(words, ["\u{e9}"]);
    }

    #[test]
    fn test_words_iterator_over_results() {
        let chunks = vec![
            Ok(b"alpha be".to_vec()),
            Ok(Vec::new()),
            Ok(b"ta gamma".to_vec()),
        ];
        let words: Vec<String> = Words::new(chunks.into_iter()).collect();
        assert_eq!(words, ["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_words_iterator_stops_on_error() {
        let chunks = vec![
            Ok(b"before err".to_vec()),
            Err(EngineError::DecompressStalled),
            Ok(b"never seen".to_vec()),
        ];
        let mut words = Words::new(chunks.into_iter());
        assert_eq!(words.next().as_deref(), Some("before"));
        assert_eq!(words.next().as_deref(), Some("err"));
        assert_eq!(words.next(), None);
        assert!(matches!(words.error(), Some(EngineError::DecompressStalled)));
    }
}
