//! Input vocabulary: commands and the character keymap.

use super::cursor::Direction;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A logical key-press understood by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move the cursor one cell.
    Move(Direction),
    /// Place a mark (or pick a menu entry).
    Confirm,
    /// Leave immediately.
    Quit,
}

/// Character bindings for the six commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keymap {
    /// Key moving the cursor up.
    pub up: char,
    /// Key moving the cursor down.
    pub down: char,
    /// Key moving the cursor left.
    pub left: char,
    /// Key moving the cursor right.
    pub right: char,
    /// Key placing a mark.
    pub confirm: char,
    /// Key quitting.
    pub quit: char,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            up: 'k',
            down: 'j',
            left: 'h',
            right: 'l',
            confirm: ' ',
            quit: 'q',
        }
    }
}

impl Keymap {
    /// Maps a typed character to a command; unbound characters yield `None`.
    #[instrument(skip(self))]
    pub fn command(&self, key: char) -> Option<Command> {
        match key {
            k if k == self.up => Some(Command::Move(Direction::Up)),
            k if k == self.down => Some(Command::Move(Direction::Down)),
            k if k == self.left => Some(Command::Move(Direction::Left)),
            k if k == self.right => Some(Command::Move(Direction::Right)),
            k if k == self.confirm => Some(Command::Confirm),
            k if k == self.quit => Some(Command::Quit),
            _ => None,
        }
    }

    /// Short help line describing the bindings.
    pub fn help(&self) -> String {
        format!(
            "{}/{}/{}/{}: ←/↓/↑/→ | {}: place | {}: quit",
            self.left,
            self.down,
            self.up,
            self.right,
            key_label(self.confirm),
            key_label(self.quit)
        )
    }
}

/// Human-readable name for a bound character.
pub fn key_label(key: char) -> String {
    match key {
        ' ' => "space".to_string(),
        '\t' => "tab".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = Keymap::default();
        assert_eq!(keys.command('h'), Some(Command::Move(Direction::Left)));
        assert_eq!(keys.command('j'), Some(Command::Move(Direction::Down)));
        assert_eq!(keys.command('k'), Some(Command::Move(Direction::Up)));
        assert_eq!(keys.command('l'), Some(Command::Move(Direction::Right)));
        assert_eq!(keys.command(' '), Some(Command::Confirm));
        assert_eq!(keys.command('q'), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        assert_eq!(Keymap::default().command('x'), None);
    }

    #[test]
    fn test_help_names_space() {
        assert!(Keymap::default().help().contains("space: place"));
    }
}
