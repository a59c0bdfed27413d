//! Game screen: the board, whose turn it is, and the result.

use crossterm::event::{KeyCode, KeyEvent};
use gridline_core::{Board, Command, Game, GameStatus, Step};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, info, instrument};

use super::board_view::board_lines;
use super::keys::command_for;
use crate::config::AppConfig;

/// Why the game screen closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameExit {
    /// The players asked to quit the program.
    Quit,
    /// The players asked to go back to the board menu.
    Menu,
}

/// State for a game in progress (or just finished).
#[derive(Debug)]
pub struct GameScreen<'a> {
    game: Game,
    title: String,
    config: &'a AppConfig,
    from_menu: bool,
}

impl<'a> GameScreen<'a> {
    /// Creates a game screen, moving the cursor onto the playable region.
    #[instrument(skip(game, config))]
    pub fn new(mut game: Game, title: &str, config: &'a AppConfig, from_menu: bool) -> Self {
        game.home_cursor();
        debug!(cursor = %game.cursor(), "Initializing GameScreen");
        Self {
            game,
            title: title.to_string(),
            config,
            from_menu,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handles a key press; returns `Some` when the screen should close.
    #[instrument(skip(self, key))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameExit> {
        let command = command_for(&key, self.config.keys());

        if self.game.status().is_over() {
            return match (command, key.code) {
                (Some(Command::Quit), _) => Some(GameExit::Quit),
                (_, KeyCode::Char('r')) => {
                    self.game.restart();
                    None
                }
                (_, KeyCode::Char('m')) if self.from_menu => Some(GameExit::Menu),
                _ => None,
            };
        }

        let command = command?;
        match self.game.step(command) {
            Step::Quit => {
                info!("User quit");
                Some(GameExit::Quit)
            }
            Step::Placed { at, status } => {
                info!(%at, ?status, "Mark placed");
                None
            }
            Step::Rejected => {
                debug!(cursor = %self.game.cursor(), "Cell not playable");
                None
            }
            Step::Moved(_) | Step::Stayed => None,
        }
    }

    /// The status line under the board.
    pub fn status_line(&self) -> String {
        let glyphs = self.config.glyphs();
        match self.game.status() {
            GameStatus::InProgress => {
                let player = self.game.turn();
                format!("{} ({}) to move", player, glyphs.mark(player))
            }
            GameStatus::Won(player) => {
                format!("{} ({}) wins!", player, glyphs.mark(player))
            }
            GameStatus::Tie => "It's a tie...".to_string(),
        }
    }

    fn help_line(&self) -> String {
        if self.game.status().is_over() {
            let quit = gridline_core::key_label(self.config.keys().quit);
            if self.from_menu {
                format!("r: restart | m: menu | {}: quit", quit)
            } else {
                format!("r: restart | {}: quit", quit)
            }
        } else {
            format!("{} | arrows/enter also work", self.config.keys().help())
        }
    }

    /// Renders the screen into the provided [`Frame`].
    pub fn render(&self, frame: &mut Frame) {
        let board = self.game.board();
        let (board_width, board_height) = board_extent(board);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(board_height),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new(format!(
            "{} - {} in a row",
            self.title,
            self.game.win_length()
        ))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let cursor = (!self.game.status().is_over()).then(|| self.game.cursor());
        let lines = board_lines(board, self.config.glyphs(), cursor);
        frame.render_widget(
            Paragraph::new(lines),
            center_rect(chunks[1], board_width, board_height),
        );

        let status_color = if self.game.status().is_over() {
            Color::Green
        } else {
            Color::Yellow
        };
        let status = Paragraph::new(self.status_line())
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        frame.render_widget(status, chunks[2]);

        let help = Paragraph::new(self.help_line())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }
}

/// Terminal columns and rows taken by the `|a b c|` board text, saturating at `u16::MAX`.
fn board_extent(board: &Board) -> (u16, u16) {
    let width = board
        .width()
        .checked_mul(2)
        .and_then(|w| u16::try_from(w + 1).ok())
        .unwrap_or(u16::MAX);
    let height = u16::try_from(board.height()).unwrap_or(u16::MAX);
    (width, height)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use gridline_core::{Cell, Player, Position};

    fn press(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_starts_inside_bordered_board() {
        let config = AppConfig::default();
        let board: Board = ".#\n...\n".parse().unwrap();
        let screen = GameScreen::new(Game::new(board), "row", &config, false);
        assert_eq!(screen.game().cursor(), Position::new(1, 1));
    }

    #[test]
    fn test_keys_play_a_game_to_the_end() {
        let config = AppConfig::default();
        let board: Board = ".#\n...\n...\n".parse().unwrap();
        let mut screen = GameScreen::new(Game::new(board), "rows", &config, true);

        // Cross takes the top row, Nought the bottom row.
        for key in [' ', 'j', ' ', 'k', 'l', ' ', 'j', ' ', 'k', 'l', ' '] {
            assert_eq!(screen.handle_key(press(key)), None);
        }
        assert_eq!(screen.game().status(), GameStatus::Won(Player::Cross));
        assert_eq!(screen.status_line(), "Player 1 (X) wins!");

        assert_eq!(screen.handle_key(press('r')), None);
        assert_eq!(screen.game().status(), GameStatus::InProgress);
        let board = screen.game().board();
        assert!(board.positions().all(|p| board.get(p).is_ok_and(|c| c.mark().is_none())));
        assert_eq!(board.get(Position::new(1, 1)), Ok(Cell::Empty));
        assert_eq!(screen.game().cursor(), Position::new(1, 1));

        assert_eq!(screen.handle_key(press('q')), Some(GameExit::Quit));
    }

    #[test]
    fn test_menu_key_only_from_menu() {
        let config = AppConfig::default();
        let mut game = Game::with_win_length(Board::rectangle(1, 1), 1).unwrap();
        assert!(game.attempt_move(Position::new(0, 0)));

        let mut standalone = GameScreen::new(game.clone(), "solo", &config, false);
        assert_eq!(standalone.handle_key(press('m')), None);

        let mut from_menu = GameScreen::new(game, "solo", &config, true);
        assert_eq!(from_menu.handle_key(press('m')), Some(GameExit::Menu));
    }

    #[test]
    fn test_status_line_names_mover() {
        let config = AppConfig::default();
        let screen = GameScreen::new(Game::new(Board::default()), "3x3", &config, false);
        assert_eq!(screen.status_line(), "Player 1 (X) to move");
    }

    #[test]
    fn test_board_extent_saturates() {
        assert_eq!(board_extent(&Board::default()), (7, 3));
        assert_eq!(board_extent(&Board::rectangle(40_000, 2)), (u16::MAX, 2));
    }

    #[test]
    fn test_center_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        assert_eq!(center_rect(area, 4, 2), Rect::new(3, 1, 4, 2));
        assert_eq!(center_rect(area, u16::MAX, u16::MAX), area);
    }
}
