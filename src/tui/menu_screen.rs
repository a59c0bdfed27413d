//! Board selection menu with a preview of the highlighted board.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use gridline_core::{Command, Direction as Move, Keymap, key_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{debug, info, instrument};

use super::board_view::board_lines;
use super::keys::command_for;
use crate::catalog::BoardCatalog;
use crate::config::AppConfig;

/// What the menu wants after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Keep showing the menu.
    Stay,
    /// Play the board at this catalog index.
    Play(usize),
    /// Leave the program.
    Quit,
}

/// State for the board selection menu.
#[derive(Debug, Getters)]
pub struct MenuScreen {
    catalog: BoardCatalog,
    list_state: ListState,
}

impl MenuScreen {
    /// Creates a menu over `catalog` with the first board selected.
    #[instrument(skip(catalog))]
    pub fn new(catalog: BoardCatalog) -> Self {
        info!(board_count = catalog.len(), "Initializing MenuScreen");
        let mut state = ListState::default();
        if !catalog.is_empty() {
            state.select(Some(0));
        }
        Self {
            catalog,
            list_state: state,
        }
    }

    /// Moves selection up, stopping at the first board.
    fn select_previous(&mut self) {
        let i = self.list_state.selected().unwrap_or(0).saturating_sub(1);
        self.list_state.select(Some(i));
    }

    /// Moves selection down, stopping at the last board.
    fn select_next(&mut self) {
        if self.catalog.is_empty() {
            return;
        }
        let last = self.catalog.len() - 1;
        let i = self.list_state.selected().map_or(0, |i| (i + 1).min(last));
        self.list_state.select(Some(i));
    }

    /// Index of the highlighted board.
    pub fn selected(&self) -> Option<usize> {
        self.list_state
            .selected()
            .filter(|&i| i < self.catalog.len())
    }

    /// Handles a key press.
    #[instrument(skip(self, key, keymap))]
    pub fn handle_key(&mut self, key: KeyEvent, keymap: &Keymap) -> MenuAction {
        match command_for(&key, keymap) {
            Some(Command::Move(Move::Up)) => {
                self.select_previous();
                MenuAction::Stay
            }
            Some(Command::Move(Move::Down)) => {
                self.select_next();
                MenuAction::Stay
            }
            Some(Command::Confirm) => match self.selected() {
                Some(index) => {
                    debug!(index, "Board chosen");
                    MenuAction::Play(index)
                }
                None => MenuAction::Stay,
            },
            Some(Command::Quit) => MenuAction::Quit,
            Some(Command::Move(_)) | None => MenuAction::Stay,
        }
    }

    /// Renders the menu into the provided [`Frame`].
    #[instrument(skip_all)]
    pub fn render(&self, frame: &mut Frame, config: &AppConfig) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!("Gridline - {} in a row", config.win_length()))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let list_width = (self.catalog.longest_name() + 6) as u16;
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(list_width), Constraint::Min(10)])
            .split(chunks[1]);

        let items: Vec<ListItem> = self
            .catalog
            .entries()
            .iter()
            .map(|entry| ListItem::new(entry.name().clone()))
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Boards"))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, body[0], &mut list_state);

        let preview = match self.selected().and_then(|i| self.catalog.get(i)) {
            Some(entry) => {
                let board = entry.board();
                let mut lines = board_lines(board, config.glyphs(), None);
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("{} x {}", board.width(), board.height()),
                    Style::default().fg(Color::DarkGray),
                ));
                lines
            }
            None => vec![Line::raw("No board selected")],
        };
        let preview = Paragraph::new(preview)
            .block(Block::default().borders(Borders::ALL).title("Preview"));
        frame.render_widget(preview, body[1]);

        let keys = config.keys();
        let help = Paragraph::new(format!(
            "{}/{}: select | {}/enter: play | {}: quit",
            key_label(keys.up),
            key_label(keys.down),
            key_label(keys.confirm),
            key_label(keys.quit)
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::fs;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn menu_with(names: &[&str]) -> (tempfile::TempDir, MenuScreen) {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(format!("{}.ttt", name)), ".#\n...\n").unwrap();
        }
        let catalog = BoardCatalog::scan(dir.path()).unwrap();
        (dir, MenuScreen::new(catalog))
    }

    #[test]
    fn test_selection_clamps_at_ends() {
        let (_dir, mut menu) = menu_with(&["a", "b"]);
        let keys = Keymap::default();

        menu.handle_key(press(KeyCode::Up), &keys);
        assert_eq!(menu.selected(), Some(0));

        menu.handle_key(press(KeyCode::Down), &keys);
        menu.handle_key(press(KeyCode::Down), &keys);
        assert_eq!(menu.selected(), Some(1));
    }

    #[test]
    fn test_confirm_plays_selection() {
        let (_dir, mut menu) = menu_with(&["alpha", "beta", "gamma"]);
        let keys = Keymap::default();
        menu.handle_key(press(KeyCode::Char('j')), &keys);
        assert_eq!(
            menu.handle_key(press(KeyCode::Enter), &keys),
            MenuAction::Play(1)
        );
        assert_eq!(menu.catalog().get(1).unwrap().name(), "beta");
    }

    #[test]
    fn test_quit_key() {
        let (_dir, mut menu) = menu_with(&["a"]);
        assert_eq!(
            menu.handle_key(press(KeyCode::Char('q')), &Keymap::default()),
            MenuAction::Quit
        );
    }
}
