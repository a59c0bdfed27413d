//! Terminal UI: raw-mode lifecycle, key reading and the screen loops.

mod board_view;
mod game_screen;
mod keys;
mod menu_screen;

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridline_core::{Board, Game};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error, info, instrument};

use crate::catalog::BoardCatalog;
use crate::config::AppConfig;

pub use board_view::board_lines;
pub use game_screen::{GameExit, GameScreen};
pub use keys::command_for;
pub use menu_screen::{MenuAction, MenuScreen};

/// Terminal type used by every screen.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while in raw mode. Restores it on drop.
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    /// Enters raw mode and the alternate screen, and hides the cursor.
    ///
    /// Also installs a panic hook so a panic restores the terminal before
    /// its message is printed.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            restore();
            return Err(e);
        }
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => {
                info!("Terminal ready");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore();
                Err(e)
            }
        }
    }

    /// Returns the terminal to draw on.
    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        info!("Restoring terminal");
        restore();
    }
}

/// Leaves raw mode and the alternate screen. Errors are ignored.
fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!(%panic_info, "Panic");
        restore();
        hook(panic_info);
    }));
}

/// Blocks for the next key press.
///
/// Returns `None` when the terminal was resized and the caller should redraw.
fn read_key() -> io::Result<Option<KeyEvent>> {
    loop {
        match event::read()? {
            // Skip key release events (some platforms fire both press and release).
            Event::Key(key) if key.kind != KeyEventKind::Release => return Ok(Some(key)),
            Event::Resize(..) => return Ok(None),
            other => debug!(event = ?other, "Ignoring event"),
        }
    }
}

/// Runs one screen until it reports an exit.
fn run_game(terminal: &mut Tui, mut screen: GameScreen<'_>) -> Result<GameExit> {
    loop {
        terminal.draw(|f| screen.render(f))?;
        let Some(key) = read_key()? else {
            continue;
        };
        if let Some(exit) = screen.handle_key(key) {
            return Ok(exit);
        }
    }
}

/// Plays a single board until the players quit.
///
/// # Errors
///
/// Fails on an invalid win length or a terminal I/O error.
#[instrument(skip(terminal, board, config))]
pub fn play_board(terminal: &mut Tui, board: Board, title: &str, config: &AppConfig) -> Result<()> {
    let game = Game::with_win_length(board, *config.win_length())?;
    let exit = run_game(terminal, GameScreen::new(game, title, config, false))?;
    info!(?exit, "Game screen closed");
    Ok(())
}

/// Runs the board selection menu, launching games from it.
///
/// # Errors
///
/// Fails on an invalid win length or a terminal I/O error.
#[instrument(skip_all, fields(boards = catalog.len()))]
pub fn run_menu(terminal: &mut Tui, catalog: BoardCatalog, config: &AppConfig) -> Result<()> {
    let mut menu = MenuScreen::new(catalog);

    loop {
        terminal.draw(|f| menu.render(f, config))?;
        let Some(key) = read_key()? else {
            continue;
        };

        match menu.handle_key(key, config.keys()) {
            MenuAction::Stay => {}
            MenuAction::Quit => {
                info!("Menu quitting");
                return Ok(());
            }
            MenuAction::Play(index) => {
                let Some(entry) = menu.catalog().get(index) else {
                    continue;
                };
                info!(board = %entry.name(), "Starting game from menu");
                let game = Game::with_win_length(entry.board().clone(), *config.win_length())?;
                let screen = GameScreen::new(game, entry.name(), config, true);
                match run_game(terminal, screen)? {
                    GameExit::Menu => debug!("Back to menu"),
                    GameExit::Quit => return Ok(()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_panic_hook_logs_before_restoring() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            install_panic_hook();
            let result = std::panic::catch_unwind(|| panic!("board exploded"));
            drop(std::panic::take_hook());
            assert!(result.is_err());
        });

        let logged = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("Panic"), "log was: {logged}");
        assert!(logged.contains("board exploded"), "log was: {logged}");
    }
}
