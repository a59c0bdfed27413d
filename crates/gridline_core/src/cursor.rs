//! Cursor movement for keyboard navigation.

use super::board::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A direction the cursor can be moved in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

/// A cursor clamped to a `width x height` grid.
///
/// The cursor knows nothing about cell contents. Landing on a blocked cell
/// is the caller's policy to refuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: Position,
    width: usize,
    height: usize,
}

impl Cursor {
    /// Creates a cursor at `(0, 0)` on a grid of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            position: Position::default(),
            width,
            height,
        }
    }

    /// Returns the current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves to `position`, clamped into the grid.
    pub fn place(&mut self, position: Position) {
        self.position = Position::new(
            position.x.min(self.width.saturating_sub(1)),
            position.y.min(self.height.saturating_sub(1)),
        );
    }

    /// Moves one step in `direction`, staying put at the edge.
    #[instrument(skip(self), fields(from = %self.position))]
    pub fn shift(&mut self, direction: Direction) -> Position {
        let Position { x, y } = self.position;
        let next = match direction {
            Direction::Up => Position::new(x, y.saturating_sub(1)),
            Direction::Down => Position::new(x, y + 1),
            Direction::Left => Position::new(x.saturating_sub(1), y),
            Direction::Right => Position::new(x + 1, y),
        };
        self.place(next);
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_at_left_edge_stays() {
        let mut cursor = Cursor::new(4, 3);
        assert_eq!(cursor.shift(Direction::Left), Position::new(0, 0));
    }

    #[test]
    fn test_right_at_right_edge_stays() {
        let mut cursor = Cursor::new(4, 3);
        cursor.place(Position::new(3, 1));
        assert_eq!(cursor.shift(Direction::Right), Position::new(3, 1));
    }

    #[test]
    fn test_vertical_clamping() {
        let mut cursor = Cursor::new(2, 2);
        assert_eq!(cursor.shift(Direction::Up), Position::new(0, 0));
        assert_eq!(cursor.shift(Direction::Down), Position::new(0, 1));
        assert_eq!(cursor.shift(Direction::Down), Position::new(0, 1));
    }

    #[test]
    fn test_place_clamps() {
        let mut cursor = Cursor::new(3, 3);
        cursor.place(Position::new(10, 7));
        assert_eq!(cursor.position(), Position::new(2, 2));
    }
}
