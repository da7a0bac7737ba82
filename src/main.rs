//! Bricks entry point
//!
//! Parses the command line, loads settings and the level, then runs the
//! game window.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use bricks::Settings;
use bricks::sim::{GameState, Level};

#[derive(Parser, Debug)]
#[command(name = "bricks", about = "Break all the bricks", version)]
struct Cli {
    /// Level file, one `x;y;life_count;` brick per line
    level: Option<PathBuf>,
    /// Play a generated grid of bricks instead of a level file
    #[arg(long, conflicts_with = "level")]
    generate: bool,
    /// Seed for random brick lives in a generated level
    #[arg(long, requires = "generate")]
    seed: Option<u64>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .init();
}

/// Why the command line cannot start a game
#[derive(Debug)]
enum CliError {
    /// `--help` or `--version`, clap prints it and exits successfully
    Info(clap::Error),
    /// Missing, conflicting or malformed arguments, with the message to print
    Usage(String),
}

/// Parse arguments and require exactly one level source
fn parse_args<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args).map_err(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => CliError::Info(e),
        // clap's message already ends with the usage line
        _ => CliError::Usage(e.to_string()),
    })?;
    if cli.level.is_none() && !cli.generate {
        return Err(CliError::Usage(Cli::command().render_usage().to_string()));
    }
    Ok(cli)
}

fn run(cli: Cli) -> Result<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    let level = match &cli.level {
        Some(path) => {
            let level = Level::load(path, &settings)?;
            log::info!("Loaded {} bricks from {}", level.len(), path.display());
            level
        }
        None => {
            let level = Level::generate(&settings, cli.seed);
            log::info!("Generated {} bricks (seed: {:?})", level.len(), cli.seed);
            level
        }
    };

    bricks::app::run(GameState::new(settings, level))
}

fn main() {
    init_logging();

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(CliError::Info(e)) => e.exit(),
        Err(CliError::Usage(message)) => {
            println!("{message}");
            process::exit(-1);
        }
    };

    if let Err(e) = run(cli) {
        log::error!("{e:#}");
        process::exit(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_usage_error(args: &[&str]) -> bool {
        matches!(parse_args(args), Err(CliError::Usage(_)))
    }

    #[test]
    fn test_no_level_source_is_usage_error() {
        assert!(is_usage_error(&["bricks"]));
        assert!(is_usage_error(&["bricks", "--config", "settings.json"]));
    }

    #[test]
    fn test_both_level_sources_is_usage_error() {
        assert!(is_usage_error(&["bricks", "--generate", "level.txt"]));
    }

    #[test]
    fn test_seed_requires_generate() {
        assert!(is_usage_error(&["bricks", "--seed", "7", "level.txt"]));
        assert!(is_usage_error(&["bricks", "--generate", "--seed", "x"]));
    }

    #[test]
    fn test_unknown_argument_is_usage_error() {
        assert!(is_usage_error(&["bricks", "level.txt", "extra.txt"]));
        assert!(is_usage_error(&["bricks", "--fast", "level.txt"]));
    }

    #[test]
    fn test_level_file() {
        let cli = parse_args(["bricks", "level.txt"]).unwrap();
        assert_eq!(cli.level, Some(PathBuf::from("level.txt")));
        assert!(!cli.generate);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn test_generated_level_with_seed() {
        let cli = parse_args(["bricks", "--generate", "--seed", "42"]).unwrap();
        assert!(cli.generate);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.level, None);
    }

    #[test]
    fn test_help_is_not_usage_error() {
        assert!(matches!(
            parse_args(["bricks", "--help"]),
            Err(CliError::Info(_))
        ));
    }
}
