//! Key event translation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridline_core::{Command, Direction, Keymap};

/// Maps a key press to a command.
///
/// Arrow keys, Enter and Esc always work; printable characters go through
/// the configured keymap. Ctrl+C quits, since raw mode swallows the signal.
pub fn command_for(key: &KeyEvent, keymap: &Keymap) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up => Some(Command::Move(Direction::Up)),
        KeyCode::Down => Some(Command::Move(Direction::Down)),
        KeyCode::Left => Some(Command::Move(Direction::Left)),
        KeyCode::Right => Some(Command::Move(Direction::Right)),
        KeyCode::Enter => Some(Command::Confirm),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => keymap.command(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_keymap_agree() {
        let keys = Keymap::default();
        assert_eq!(
            command_for(&press(KeyCode::Left), &keys),
            command_for(&press(KeyCode::Char('h')), &keys)
        );
    }

    #[test]
    fn test_ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(&key, &Keymap::default()), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(command_for(&press(KeyCode::Char('z')), &Keymap::default()), None);
        assert_eq!(command_for(&press(KeyCode::F(1)), &Keymap::default()), None);
    }
}
