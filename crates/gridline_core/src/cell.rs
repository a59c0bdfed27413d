//! Core domain types: players and cells.

use serde::{Deserialize, Serialize};

/// One of the two players sharing the keyboard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Player {
    /// First mark (index 0, moves first).
    #[strum(to_string = "Player 1")]
    Cross,
    /// Second mark (index 1).
    #[strum(to_string = "Player 2")]
    Nought,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Returns the player's index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            Player::Cross => 0,
            Player::Nought => 1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Outside the playable region.
    Blocked,
    /// Playable and unoccupied.
    Empty,
    /// Decorative blocked cell on board files; never playable.
    Path,
    /// Occupied by a player.
    Mark(Player),
}

impl Cell {
    /// Checks if a move may be placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the player occupying this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Mark(player) => Some(player),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_player_indices() {
        assert_eq!(Player::Cross.index(), 0);
        assert_eq!(Player::Nought.index(), 1);
        assert_eq!(Player::Nought.to_string(), "Player 2");
    }

    #[test]
    fn test_only_marks_carry_a_player() {
        assert_eq!(Cell::Mark(Player::Nought).mark(), Some(Player::Nought));
        assert_eq!(Cell::Path.mark(), None);
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Blocked.is_empty());
    }
}
