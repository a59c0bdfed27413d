//! Gridline - terminal front end

#![warn(missing_docs)]

mod cli;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use gridline::{AppConfig, BoardCatalog, Overrides, TerminalGuard, logging, play_board, run_menu};
use gridline_core::{Board, BoardLoader};
use tracing::{error, info, instrument};

fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if !logging::init(config.log_file(), config.log_level()) {
        eprintln!(
            "Warning: could not open log file {}, continuing without logs",
            config.log_file().display()
        );
    }
    info!(version = env!("CARGO_PKG_VERSION"), "Starting gridline");

    match run(cli.command, &config) {
        Ok(()) => {
            info!("Exiting normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{:#}", e), "Exiting with error");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let boards_dir = match &cli.command {
        Some(Command::Menu { dir }) => dir.clone(),
        _ => None,
    };
    let overrides = Overrides::new(cli.win_length, boards_dir, cli.log_file.clone());
    let config = AppConfig::load(cli.config.as_deref())?.apply(overrides)?;
    Ok(config)
}

/// Loads what the chosen mode needs, then hands the terminal to the UI.
///
/// Loading happens before raw mode so errors print to a normal terminal.
#[instrument(skip_all)]
fn run(command: Option<Command>, config: &AppConfig) -> Result<()> {
    match command {
        Some(Command::Play { board }) => {
            let (board, title) = match board {
                Some(path) => {
                    let board = BoardLoader::from_file(&path)
                        .with_context(|| format!("Failed to load board {}", path.display()))?;
                    let title = path
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "board".to_string());
                    (board, title)
                }
                None => (Board::default(), "classic".to_string()),
            };
            info!(%title, width = board.width(), height = board.height(), "Playing single board");
            let mut guard = TerminalGuard::enter()?;
            play_board(guard.terminal(), board, &title, config)
        }
        Some(Command::Menu { .. }) | None => {
            let catalog = BoardCatalog::scan(config.boards_dir())?;
            let mut guard = TerminalGuard::enter()?;
            run_menu(guard.terminal(), catalog, config)
        }
    }
}
