//! Command-line interface for gridline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gridline - N-in-a-row for two players on custom boards
#[derive(Parser, Debug)]
#[command(name = "gridline")]
#[command(about = "Two-player N-in-a-row on boards of any shape", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./gridline.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Diagnostic log file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Marks in a row needed to win
    #[arg(short = 'n', long, global = true)]
    pub win_length: Option<usize>,

    /// Subcommand to run (the board menu when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single board
    Play {
        /// Board description file. The classic 3x3 board is used when omitted.
        board: Option<PathBuf>,
    },

    /// Pick a board from a directory of .ttt files
    Menu {
        /// Directory containing .ttt board files
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_menu() {
        let cli = Cli::try_parse_from(["gridline"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gridline", "play", "plus.ttt", "-n", "4"]).unwrap();
        assert_eq!(cli.win_length, Some(4));
        match cli.command {
            Some(Command::Play { board }) => assert_eq!(board, Some(PathBuf::from("plus.ttt"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_menu_dir() {
        let cli = Cli::try_parse_from(["gridline", "menu", "--dir", "boards"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Menu { dir: Some(_) })));
    }
}
