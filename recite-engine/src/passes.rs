//! Endless word streams built from repeated passes over a source
//!
//! A *pass* is one full traversal of a source (the embedded payload, or one
//! open/read/close cycle of a file). [`Restarting`] drives passes one after
//! another as an explicit state machine, so the resulting iterator never ends
//! on its own.

use crate::error::Result;

/// A source that can be traversed any number of times
pub trait PassSource {
    /// Words of a single pass
    type Pass: Iterator<Item = String>;

    /// Start a fresh pass with new decoder/file state
    fn open_pass(&mut self) -> Result<Self::Pass>;

    /// Short name used in log messages
    fn name(&self) -> &'static str;

    /// Called when a pass opened by [`open_pass`](Self::open_pass) runs out
    /// after `emitted` words.
    ///
    /// The returned pass is played before the next restart. A source that
    /// returns `None` after a pass with no words stops the stream.
    fn pass_finished(&mut self, _pass: &Self::Pass, _emitted: u64) -> Option<Self::Pass> {
        None
    }
}

/// Position of a [`Restarting`] stream
#[derive(Debug)]
enum PassState<P> {
    /// No pass open yet
    Init,
    /// Emitting words of the current pass
    Reading {
        pass: P,
        /// Words emitted so far in this pass
        emitted: u64,
        /// Whether this pass stands in for one that produced nothing
        fallback: bool,
    },
    /// The previous pass finished and produced words
    Restart,
    /// A pass could not be opened, or produced no words and had no fallback
    Stopped,
}

/// Iterator that restarts its source whenever a pass is exhausted.
///
/// A pass that yields no words stops the stream instead of spinning forever,
/// unless the source supplies a fallback pass through
/// [`PassSource::pass_finished`]. A pass that cannot be opened also stops it.
#[derive(Debug)]
pub struct Restarting<S: PassSource> {
    source: S,
    state: PassState<S::Pass>,
    passes: u64,
}

impl<S: PassSource> Restarting<S> {
    /// Wrap a source; no pass is opened until the first word is requested
    pub fn new(source: S) -> Self {
        Self {
            source,
            state: PassState::Init,
            passes: 0,
        }
    }

    /// Number of passes started so far
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Whether the stream has stopped for good
    pub fn is_stopped(&self) -> bool {
        matches!(self.state, PassState::Stopped)
    }

    /// The underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    fn open(&mut self) {
        match self.source.open_pass() {
            Ok(pass) => {
                self.passes += 1;
                log::debug!("{}: starting pass {}", self.source.name(), self.passes);
                self.state = PassState::Reading {
                    pass,
                    emitted: 0,
                    fallback: false,
                };
            }
            Err(err) => {
                log::error!("{}: cannot start pass: {err}", self.source.name());
                self.state = PassState::Stopped;
            }
        }
    }
}

impl<S: PassSource> Iterator for Restarting<S> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            match &mut self.state {
                PassState::Init | PassState::Restart => self.open(),
                PassState::Reading {
                    pass,
                    emitted,
                    fallback,
                } => {
                    if let Some(word) = pass.next() {
                        *emitted += 1;
                        return Some(word);
                    }
                    let emitted = *emitted;
                    let replacement = if *fallback {
                        None
                    } else {
                        self.source.pass_finished(pass, emitted)
                    };
                    self.state = match replacement {
                        Some(pass) => {
                            log::debug!(
                                "{}: pass {} replaced by fallback words",
                                self.source.name(),
                                self.passes
                            );
                            PassState::Reading {
                                pass,
                                emitted: 0,
                                fallback: true,
                            }
                        }
                        None if emitted == 0 => {
                            log::warn!(
                                "{}: pass {} produced no words, stopping",
                                self.source.name(),
                                self.passes
                            );
                            PassState::Stopped
                        }
                        None => PassState::Restart,
                    };
                }
                PassState::Stopped => return None,
            }
        }
    }
}
