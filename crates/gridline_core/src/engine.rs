//! Turn state machine: legality, alternation, win and tie detection.

use super::board::{Board, Position};
use super::cell::{Cell, Player};
use super::cursor::{Cursor, Direction};
use super::input::Command;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Run length used when none is configured.
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// The four undirected line directions: vertical, diagonal, horizontal, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 1), (1, 0), (1, -1)];

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled up without a winner.
    Tie,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Errors raised when setting up a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A run length of zero can never be satisfied meaningfully.
    #[display("win length must be at least 1, got {}", _0)]
    InvalidWinLength(#[error(not(source))] usize),
}

/// What a single command did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The cursor moved to a new cell.
    Moved(Position),
    /// The cursor could not move.
    Stayed,
    /// A mark was placed.
    Placed {
        /// Where the mark went.
        at: Position,
        /// Status after the move.
        status: GameStatus,
    },
    /// The cell under the cursor cannot take a mark, or the game is over.
    Rejected,
    /// The player asked to leave.
    Quit,
}

/// N-in-a-row game engine.
///
/// Owns its board and cursor. Once the status leaves
/// [`GameStatus::InProgress`] every further move is rejected.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    win_length: usize,
    turn: Player,
    status: GameStatus,
    cursor: Cursor,
}

impl Game {
    /// Creates a game on `board` with the default run length of 3.
    ///
    /// A board without a single empty cell is a tie from the start.
    #[instrument(skip(board))]
    pub fn new(board: Board) -> Self {
        let cursor = Cursor::new(board.width(), board.height());
        let status = opening_status(&board);
        Self {
            board,
            win_length: DEFAULT_WIN_LENGTH,
            turn: Player::Cross,
            status,
            cursor,
        }
    }

    /// Creates a game requiring `win_length` marks in a row.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidWinLength`] if `win_length` is zero.
    #[instrument(skip(board))]
    pub fn with_win_length(board: Board, win_length: usize) -> Result<Self, GameError> {
        if win_length == 0 {
            return Err(GameError::InvalidWinLength(win_length));
        }
        let mut game = Self::new(board);
        game.win_length = win_length;
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the required run length.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor.position()
    }

    /// Starts over on the same shape with every mark removed.
    ///
    /// Cross moves first again and the cursor returns home.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.turn = Player::Cross;
        self.status = opening_status(&self.board);
        self.home_cursor();
        info!(status = ?self.status, "Game restarted");
    }

    /// Places the mover's mark at `pos` if that cell is empty.
    ///
    /// On success the status is re-evaluated: a completed run wins, a full
    /// board ties, otherwise the turn passes. Rejected moves change nothing.
    #[instrument(skip(self), fields(player = ?self.turn))]
    pub fn attempt_move(&mut self, pos: Position) -> bool {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move after game end rejected");
            return false;
        }

        match self.board.get(pos) {
            Ok(Cell::Empty) => {}
            other => {
                debug!(cell = ?other, "Move rejected");
                return false;
            }
        }

        let mover = self.turn;
        if let Err(e) = self.board.set(pos, Cell::Mark(mover)) {
            warn!(error = %e, "Failed to place mark");
            return false;
        }

        if self.check_win(pos) {
            self.status = GameStatus::Won(mover);
            info!(winner = ?mover, "Game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Tie;
            info!("Game tied");
        } else {
            self.turn = mover.opponent();
        }

        true
    }

    /// Checks whether the mark at `last` completes a run of at least `win_length`.
    ///
    /// Each of the four directions is extended both ways from `last` until a
    /// cell off the grid or not holding the same mark is reached.
    #[instrument(skip(self))]
    pub fn check_win(&self, last: Position) -> bool {
        let Some(player) = self.board.get(last).ok().and_then(Cell::mark) else {
            return false;
        };

        DIRECTIONS
            .iter()
            .any(|&direction| self.run_length(last, direction, player) >= self.win_length)
    }

    fn run_length(&self, from: Position, direction: (isize, isize), player: Player) -> usize {
        let extent = |sign: isize| {
            (1..)
                .take_while(|&steps| {
                    let (x, y) = from.offset(direction, sign * steps);
                    self.board.safe_get(x, y) == Some(Cell::Mark(player))
                })
                .count()
        };
        extent(-1) + 1 + extent(1)
    }

    /// Applies one input command.
    #[instrument(skip(self))]
    pub fn step(&mut self, command: Command) -> Step {
        match command {
            Command::Quit => Step::Quit,
            Command::Move(direction) => self.move_cursor(direction),
            Command::Confirm => {
                let at = self.cursor.position();
                if self.attempt_move(at) {
                    Step::Placed {
                        at,
                        status: self.status,
                    }
                } else {
                    Step::Rejected
                }
            }
        }
    }

    /// Moves the cursor, skipping over blocked cells.
    ///
    /// If only blocked cells lie between the cursor and the edge, the
    /// cursor stays where it was.
    fn move_cursor(&mut self, direction: Direction) -> Step {
        let start = self.cursor.position();
        let mut previous = start;
        loop {
            let next = self.cursor.shift(direction);
            if next == previous {
                break;
            }
            if !matches!(self.board.get(next), Ok(Cell::Blocked)) {
                return Step::Moved(next);
            }
            previous = next;
        }
        self.cursor.place(start);
        Step::Stayed
    }

    /// Puts the cursor on the first empty cell, or failing that the first
    /// non-blocked one. Leaves it alone on boards with neither.
    #[instrument(skip(self))]
    pub fn home_cursor(&mut self) {
        let board = &self.board;
        let first =
            |wanted: fn(Cell) -> bool| board.positions().find(|&p| board.get(p).is_ok_and(wanted));
        let target = first(Cell::is_empty).or_else(|| first(|cell| cell != Cell::Blocked));
        if let Some(pos) = target {
            self.cursor.place(pos);
        }
    }
}

/// Status of a game before any move: a board with nowhere to play is already a tie.
fn opening_status(board: &Board) -> GameStatus {
    if board.is_full() {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}
