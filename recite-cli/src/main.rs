//! recite: stream a corpus word by word at a fixed pace

use clap::Parser;
use recite_cli::commands::Commands;
use recite_cli::CliResult;

/// Stream words from an embedded excerpt or a local corpus file
#[derive(Debug, Parser)]
#[command(name = "recite", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play_positionals() {
        let cli = Cli::try_parse_from(["recite", "play", "lossless-full", "120"]).unwrap();
        match cli.command {
            Commands::Play(args) => {
                assert_eq!(args.mode.as_deref(), Some("lossless-full"));
                assert_eq!(args.wpm, Some(120));
            }
            Commands::Encode(_) => panic!("Should be Play"),
        }
    }

    #[test]
    fn test_parse_rejects_zero_wpm() {
        assert!(Cli::try_parse_from(["recite", "play", "demo", "0"]).is_err());
    }
}
