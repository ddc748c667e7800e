//! Main entry point for acctedit.

use acctedit::cli::Cli;
use acctedit::config::LOG_ENV;
use acctedit::utils::error_exit;
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    init_logging();

    if let Err(e) = run() {
        error_exit(&format!("{e:#}"), 1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.execute().context("command failed")
}

/// Log to stderr, filtered by `ACCTEDIT_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        // Test that CLI can be parsed without panicking
        let cli = Cli::try_parse_from(["acctedit", "list"]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["acctedit", "labels", "1", "a; b"]);
        assert!(cli.is_ok());
    }
}
