//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;

pub mod encode;
pub mod play;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stream words at a fixed pace
    Play(play::PlayArgs),

    /// Compress and encode a text file into a demo payload
    Encode(encode::EncodeArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Play(args) => args.execute(),
            Commands::Encode(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) -> CliResult<()> {
    if quiet {
        return Ok(());
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let play_cmd = Commands::Play(play::PlayArgs {
            mode: Some("demo".to_string()),
            wpm: Some(60),
            corpus: None,
            payload: None,
            limit: Some(10),
            config: None,
            quiet: true,
            verbose: 0,
        });

        let debug_str = format!("{:?}", play_cmd);
        assert!(debug_str.contains("Play"));
        assert!(debug_str.contains("demo"));

        let encode_cmd = Commands::Encode(encode::EncodeArgs {
            input: None,
            output: None,
            preset: 9,
            quiet: true,
            verbose: 0,
        });
        assert!(format!("{:?}", encode_cmd).contains("Encode"));
    }
}
