//! Gridline - N-in-a-row games on arbitrarily shaped boards
//!
//! The game rules live in `gridline_core`; this crate adds the terminal
//! front end around them.
//!
//! # Architecture
//!
//! - **Config**: `gridline.toml` settings plus command-line overrides
//! - **Catalog**: `.ttt` board files found in a directory
//! - **Logging**: tracing output to a file, away from the game screen
//! - **TUI**: raw-mode terminal, board menu and game screen
//!
//! # Example
//!
//! ```no_run
//! use gridline::{AppConfig, BoardCatalog, TerminalGuard, run_menu};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load(None)?;
//! let catalog = BoardCatalog::scan(config.boards_dir())?;
//! let mut guard = TerminalGuard::enter()?;
//! run_menu(guard.terminal(), catalog, &config)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod catalog;
mod config;
pub mod logging;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, Overrides};

// Crate-level exports - Board catalog
pub use catalog::{BOARD_EXTENSION, BoardCatalog, BoardEntry, CatalogError};

// Crate-level exports - Terminal UI
pub use tui::{
    GameExit, GameScreen, MenuAction, MenuScreen, TerminalGuard, Tui, board_lines, command_for,
    play_board, run_menu,
};
