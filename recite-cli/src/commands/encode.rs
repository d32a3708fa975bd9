//! Encode command implementation
//!
//! Builds a demo payload offline: the input text is xz-compressed and the
//! result written as base-2048 symbols, ready to be played with
//! `recite play --payload` or embedded at build time.

use crate::error::CliResult;
use anyhow::Context;
use clap::Args;
use recite_engine::build_payload;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the encode command
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Text file to encode (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Payload file to write (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// xz compression preset
    #[arg(
        short,
        long,
        default_value_t = 9,
        value_parser = clap::value_parser!(u32).range(0..=9)
    )]
    pub preset: u32,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl EncodeArgs {
    /// Execute the encode command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, self.quiet)?;

        let text = self.read_input()?;
        let payload = build_payload(&text, self.preset).context("Failed to compress input")?;
        log::info!(
            "encoded {} bytes into {} symbols",
            text.len(),
            payload.chars().count()
        );

        match &self.output {
            // No trailing newline so the file can be embedded verbatim
            Some(path) => fs::write(path, &payload)
                .with_context(|| format!("Failed to write payload: {}", path.display()))?,
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{payload}").context("Failed to write to stdout")?;
            }
        }

        Ok(())
    }

    fn read_input(&self) -> CliResult<Vec<u8>> {
        match &self.input {
            Some(path) => {
                fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))
            }
            None => {
                let mut text = Vec::new();
                io::stdin()
                    .read_to_end(&mut text)
                    .context("Failed to read stdin")?;
                Ok(text)
            }
        }
    }
}
