//! Play command implementation

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::playback::{delay_for_wpm, Player};
use anyhow::Context;
use clap::Args;
use recite_engine::{
    stream_with_config, DemoSource, Mode, Restarting, StreamConfig, WordStream,
};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Arguments for the play command
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Word source: "demo", or any name starting with "lossless" for the corpus file
    #[arg(value_name = "MODE", env = "MODE")]
    pub mode: Option<String>,

    /// Pace in words per minute
    #[arg(
        value_name = "WPM",
        env = "WPM",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub wpm: Option<u32>,

    /// Plain-text corpus for lossless-full mode
    #[arg(long, value_name = "FILE", env = "SHAKES_PATH")]
    pub corpus: Option<PathBuf>,

    /// Encoded payload to play in demo mode instead of the embedded one
    #[arg(long, value_name = "FILE")]
    pub payload: Option<PathBuf>,

    /// Stop after this many words
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub limit: Option<u64>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Effective playback settings after merging flags, environment and config file
#[derive(Debug, Clone, PartialEq)]
pub struct PlaySettings {
    /// Selected word source
    pub mode: Mode,
    /// Pace in words per minute
    pub wpm: u32,
    /// Text written after each word
    pub separator: String,
    /// Word stream configuration
    pub stream: StreamConfig,
}

impl PlayArgs {
    /// Execute the play command
    pub fn execute(&self) -> CliResult<()> {
        super::init_logging(self.verbose, self.quiet)?;

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let settings = self.resolve(&file_config)?;
        log::info!(
            "playing {} mode at {} words per minute",
            settings.mode,
            settings.wpm
        );
        log::debug!("settings: {settings:?}");

        let words = self.word_stream(&settings)?;
        let stdout = io::stdout();
        let mut player = Player::new(stdout.lock(), delay_for_wpm(settings.wpm))
            .separator(settings.separator.clone())
            .limit(self.limit);
        player.play(words).context("Failed to write to stdout")?;

        Ok(())
    }

    /// Merge the command line (and environment) over the config file
    pub fn resolve(&self, file_config: &CliConfig) -> CliResult<PlaySettings> {
        let mode = Mode::parse(Some(
            self.mode
                .as_deref()
                .unwrap_or(file_config.playback.mode.as_str()),
        ));
        let wpm = self.wpm.unwrap_or(file_config.playback.wpm);
        if wpm == 0 {
            return Err(CliError::ConfigError("wpm must be at least 1".to_string()).into());
        }

        let mut stream = StreamConfig::default()
            .with_chunk_bytes(file_config.stream.chunk_bytes)
            .with_read_bytes(file_config.stream.read_bytes);
        if let Some(path) = self
            .corpus
            .as_ref()
            .or(file_config.stream.corpus_path.as_ref())
        {
            stream = stream.with_corpus_path(path);
        }
        stream
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(PlaySettings {
            mode,
            wpm,
            separator: file_config.playback.separator.clone(),
            stream,
        })
    }

    fn word_stream(
        &self,
        settings: &PlaySettings,
    ) -> CliResult<Box<dyn Iterator<Item = String>>> {
        match (&self.payload, settings.mode) {
            (Some(path), Mode::Demo) => {
                let payload = fs::read_to_string(path)
                    .map_err(|_| CliError::FileNotFound(path.display().to_string()))?;
                let source = DemoSource::with_payload(payload.trim_end(), &settings.stream)
                    .map_err(|e| CliError::InvalidPayload(e.to_string()))?;
                Ok(Box::new(Restarting::new(source)))
            }
            (Some(_), Mode::LosslessFull) => {
                log::warn!("--payload is ignored in lossless-full mode");
                Ok(Box::new(self.dispatch(settings)))
            }
            (None, _) => Ok(Box::new(self.dispatch(settings))),
        }
    }

    fn dispatch(&self, settings: &PlaySettings) -> WordStream {
        stream_with_config(settings.mode, &settings.stream)
    }
}
