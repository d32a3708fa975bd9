//! Paced playback of a word stream
//!
//! Each word is written with its separator, flushed, and followed by a fixed
//! delay. A closed consumer (for example `recite play | head`) ends playback
//! normally rather than as an error.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// Why playback stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEnd {
    /// The requested number of words was written
    Limit,
    /// The word source stopped producing words
    Exhausted,
    /// The consumer closed the output
    Disconnected,
}

/// Outcome of a playback run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Words written
    pub words: u64,
    /// Why playback stopped
    pub end: PlaybackEnd,
}

/// Delay between words for a words-per-minute rate
pub fn delay_for_wpm(wpm: u32) -> Duration {
    Duration::from_secs_f64(60.0 / f64::from(wpm.max(1)))
}

/// Writes words to an output at a fixed pace
#[derive(Debug)]
pub struct Player<W: Write> {
    out: W,
    delay: Duration,
    separator: String,
    limit: Option<u64>,
}

impl<W: Write> Player<W> {
    /// Create a player writing to `out`, pausing `delay` after each word
    pub fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            delay,
            separator: " ".to_string(),
            limit: None,
        }
    }

    /// Set the text written after each word
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Stop after `limit` words
    pub fn limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    /// Play words until the limit, the end of the source, or a disconnect.
    ///
    /// # Errors
    /// Any write error other than a broken pipe.
    pub fn play<I>(&mut self, words: I) -> io::Result<PlaybackSummary>
    where
        I: IntoIterator<Item = String>,
    {
        let mut written = 0u64;
        if self.limit == Some(0) {
            return Ok(self.summary(written, PlaybackEnd::Limit));
        }

        for word in words {
            if let Err(err) = self.emit(&word) {
                return if err.kind() == io::ErrorKind::BrokenPipe {
                    log::debug!("output closed after {written} words");
                    Ok(self.summary(written, PlaybackEnd::Disconnected))
                } else {
                    Err(err)
                };
            }
            written += 1;

            if self.limit.is_some_and(|limit| written >= limit) {
                self.finish_line();
                return Ok(self.summary(written, PlaybackEnd::Limit));
            }
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        self.finish_line();
        Ok(self.summary(written, PlaybackEnd::Exhausted))
    }

    /// Consume the player and return its output
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, word: &str) -> io::Result<()> {
        self.out.write_all(word.as_bytes())?;
        self.out.write_all(self.separator.as_bytes())?;
        self.out.flush()
    }

    fn finish_line(&mut self) {
        // The consumer may already be gone; nothing left to report
        let _ = self.out.write_all(b"\n").and_then(|()| self.out.flush());
    }

    fn summary(&self, words: u64, end: PlaybackEnd) -> PlaybackSummary {
        log::info!("playback finished: {words} words ({end:?})");
        PlaybackSummary { words, end }
    }
}
