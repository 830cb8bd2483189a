//! Command-line interface for tictactoe_classic.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe Classic - two players, one terminal, full move history
#[derive(Parser, Debug)]
#[command(name = "tictactoe_classic")]
#[command(about = "Two-player tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_filter: Option<String>,
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
    fn test_parse_overrides() {
        let cli = Cli::parse_from([
            "tictactoe_classic",
            "--config",
            "settings.toml",
            "--log-filter",
            "debug",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("settings.toml")));
        assert_eq!(cli.log_filter.as_deref(), Some("debug"));
        assert_eq!(cli.log_file, None);
    }
}
