//! Pure N-in-a-row game logic.
//!
//! Generalized tic-tac-toe on boards of any shape: the playable region is
//! whatever the board marks as [`Cell::Empty`], and a player wins by lining
//! up `win_length` marks horizontally, vertically or diagonally.
//!
//! # Example
//!
//! ```
//! use gridline_core::{Board, Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new(Board::rectangle(3, 3));
//! for (x, y) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
//!     assert!(game.attempt_move(Position::new(x, y)));
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::Cross));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod cell;
mod cursor;
mod engine;
mod glyphs;
mod input;
mod loader;

pub use board::{Board, BoardError, Position};
pub use cell::{Cell, Player};
pub use cursor::{Cursor, Direction};
pub use engine::{DEFAULT_WIN_LENGTH, Game, GameError, GameStatus, Step};
pub use glyphs::{GlyphSet, column_of};
pub use input::{Command, Keymap, key_label};
pub use loader::{BoardLoader, LoadError, LoadErrorKind};
