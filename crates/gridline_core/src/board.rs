//! Rectangular board over an arbitrary playable shape.

use super::cell::Cell;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Mask used when no board file is given: 3x3 with the top-right corner blocked.
const DEFAULT_MASK: [[bool; 3]; 3] = [
    [true, true, false],
    [true, true, true],
    [true, true, true],
];

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    /// Column, growing rightwards.
    pub x: usize,
    /// Row, growing downwards.
    pub y: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the position offset by `steps` times `(dx, dy)` in signed coordinates.
    ///
    /// The result may lie outside any board; pass it to [`Board::safe_get`].
    pub fn offset(self, (dx, dy): (isize, isize), steps: isize) -> (isize, isize) {
        (self.x as isize + dx * steps, self.y as isize + dy * steps)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Errors raised by direct board access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The coordinate lies outside the grid.
    #[display("Position ({}, {}) is outside a {}x{} board", x, y, width, height)]
    OutOfBounds {
        /// Requested column.
        x: usize,
        /// Requested row.
        y: usize,
        /// Board width.
        width: usize,
        /// Board height.
        height: usize,
    },
}

/// A `width x height` grid of cells, stored row-major.
///
/// Every row has the same length. Shapes are expressed with
/// [`Cell::Blocked`] and [`Cell::Path`] cells; the grid itself is never
/// resized after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board from a boolean mask (`true` = playable).
    ///
    /// Ragged masks are padded on the right with blocked cells.
    #[instrument(skip(mask))]
    pub fn from_mask<R: AsRef<[bool]>>(mask: &[R]) -> Self {
        let rows = mask
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&open| if open { Cell::Empty } else { Cell::Blocked })
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    /// Creates a fully playable `width x height` board.
    #[instrument]
    pub fn rectangle(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Builds a board from rows of cells, padding short rows with blocked cells.
    pub(crate) fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Cell::Blocked);
            cells.extend(row);
        }
        debug!(width, height, "Board built");
        Self {
            width,
            height,
            cells,
        }
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Checks whether a signed coordinate lies on the grid.
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Gets the cell at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the position is off the grid.
    pub fn get(&self, pos: Position) -> Result<Cell, BoardError> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Gets the cell at a signed coordinate, or `None` off the grid.
    pub fn safe_get(&self, x: isize, y: isize) -> Option<Cell> {
        if self.contains(x, y) {
            Some(self.cells[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Sets the cell at the given position. No legality check is made.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if the position is off the grid.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<(), BoardError> {
        let i = self.index(pos)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Removes every player mark, leaving blocked and path cells in place.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            if matches!(cell, Cell::Mark(_)) {
                *cell = Cell::Empty;
            }
        }
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    fn index(&self, pos: Position) -> Result<usize, BoardError> {
        if pos.x < self.width && pos.y < self.height {
            Ok(pos.y * self.width + pos.x)
        } else {
            Err(BoardError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_mask(&DEFAULT_MASK)
    }
}
