//! Mode selection between the demo and corpus word sources

use crate::config::StreamConfig;
use crate::corpus::CorpusWords;
use crate::demo::DemoWords;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Mode used when none (or an empty one) is given
pub const DEFAULT_MODE: &str = "demo";

/// Case-insensitive prefix selecting the corpus file source
pub const LOSSLESS_PREFIX: &str = "lossless";

/// Word source selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Embedded compressed excerpt, looped
    #[default]
    Demo,
    /// Plain-text corpus file, reread forever
    LosslessFull,
}

impl Mode {
    /// Resolve a mode name.
    ///
    /// Names starting with `"lossless"` in any case select
    /// [`Mode::LosslessFull`]; everything else, including an absent or empty
    /// name, falls back to [`Mode::Demo`].
    pub fn parse(name: Option<&str>) -> Self {
        let name = name.filter(|n| !n.is_empty()).unwrap_or(DEFAULT_MODE);
        if name.to_lowercase().starts_with(LOSSLESS_PREFIX) {
            Mode::LosslessFull
        } else {
            Mode::Demo
        }
    }

    /// Canonical name
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Demo => "demo",
            Mode::LosslessFull => "lossless-full",
        }
    }
}

impl FromStr for Mode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mode::parse(Some(s)))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Endless word stream for either mode
#[derive(Debug)]
pub enum WordStream {
    /// Words from the embedded payload
    Demo(DemoWords),
    /// Words from the corpus file
    Corpus(CorpusWords),
}

impl WordStream {
    /// The mode this stream was built for
    pub fn mode(&self) -> Mode {
        match self {
            WordStream::Demo(_) => Mode::Demo,
            WordStream::Corpus(_) => Mode::LosslessFull,
        }
    }
}

impl Iterator for WordStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self {
            WordStream::Demo(words) => words.next(),
            WordStream::Corpus(words) => words.next(),
        }
    }
}

/// Build the word stream for a mode name, configured from the environment
pub fn stream(mode: Option<&str>) -> WordStream {
    stream_with_config(Mode::parse(mode), &StreamConfig::from_env())
}

/// Build the word stream for a mode with an explicit configuration
pub fn stream_with_config(mode: Mode, config: &StreamConfig) -> WordStream {
    log::debug!("building {mode} word stream");
    match mode {
        Mode::Demo => WordStream::Demo(DemoWords::embedded(config)),
        Mode::LosslessFull => WordStream::Corpus(CorpusWords::from_config(config)),
    }
}
