//! recite CLI library
//!
//! This library provides the command-line interface for streaming a corpus
//! word by word: the paced playback loop, the offline payload builder and
//! the configuration file.

pub mod commands;
pub mod config;
pub mod error;
pub mod playback;

pub use error::{CliError, CliResult};
