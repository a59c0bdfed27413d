//! Display glyphs for cells.
//!
//! Gameplay code never looks at glyphs; renderers map cells through a
//! [`GlyphSet`] instead.

use super::board::Board;
use super::cell::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Character shown for each kind of cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphSet {
    /// Blocked cells.
    pub blocked: char,
    /// Empty cells.
    pub empty: char,
    /// Decorative path cells.
    pub path: char,
    /// First player's mark.
    pub cross: char,
    /// Second player's mark.
    pub nought: char,
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self {
            blocked: '░',
            empty: ' ',
            path: '·',
            cross: 'X',
            nought: 'O',
        }
    }
}

impl GlyphSet {
    /// Returns the glyph for a cell.
    pub fn cell(&self, cell: Cell) -> char {
        match cell {
            Cell::Blocked => self.blocked,
            Cell::Empty => self.empty,
            Cell::Path => self.path,
            Cell::Mark(player) => self.mark(player),
        }
    }

    /// Returns the glyph for a player's mark.
    pub fn mark(&self, player: Player) -> char {
        [self.cross, self.nought][player.index()]
    }

    /// Renders the board as text, one `|a b c|` line per row.
    pub fn text_rows(&self, board: &Board) -> Vec<String> {
        board
            .rows()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(|&c| self.cell(c).to_string()).collect();
                format!("|{}|", cells.join(" "))
            })
            .collect()
    }
}

/// Text column of cell `x` within a line from [`GlyphSet::text_rows`].
pub fn column_of(x: usize) -> usize {
    2 * x + 1
}
