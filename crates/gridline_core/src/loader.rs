//! Board description parser.
//!
//! A description is a header line followed by the grid rows:
//!
//! ```text
//! .#
//!  .
//! .#.
//!  .
//! ```
//!
//! The first two characters of the header are the empty glyph and the path
//! glyph. In the rows, the empty glyph marks a playable cell, the path glyph
//! a decorative blocked cell, and anything else a blocked cell. Rows are
//! padded to the longest one and the whole grid gets a one-cell blocked ring.

use super::board::Board;
use super::cell::Cell;
use derive_more::{Display, Error};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// What went wrong while loading a board.
#[derive(Debug, Display)]
pub enum LoadErrorKind {
    /// The header does not name two distinct glyphs.
    #[display("malformed header: expected two distinct glyphs, found {:?}", _0)]
    MalformedHeader(String),
    /// The header is not followed by any row.
    #[display("no board rows after the header")]
    NoRows,
    /// The source could not be read.
    #[display("I/O failure: {}", _0)]
    Io(std::io::Error),
}

/// Board load error with location tracking.
#[derive(Debug, Display, Error)]
#[display("Board load error: {} at {}:{}", kind, file, line)]
pub struct LoadError {
    /// What went wrong.
    #[error(not(source))]
    pub kind: LoadErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LoadError {
    /// Creates a new load error with caller location tracking.
    #[track_caller]
    pub fn new(kind: LoadErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for LoadError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(LoadErrorKind::Io(err))
    }
}

/// Parses textual board descriptions into [`Board`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardLoader;

impl BoardLoader {
    /// Parses a board description held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`LoadErrorKind::MalformedHeader`] when the first non-blank
    /// line has fewer than two characters or repeats the same glyph, and
    /// [`LoadErrorKind::NoRows`] when nothing follows the header.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn parse(text: &str) -> Result<Board, LoadError> {
        let mut lines = text.lines();
        let header = lines
            .by_ref()
            .find(|line| !line.trim().is_empty())
            .unwrap_or_default();

        let mut glyphs = header.chars();
        let (empty, path) = match (glyphs.next(), glyphs.next()) {
            (Some(empty), Some(path)) if empty != path => (empty, path),
            _ => {
                return Err(LoadError::new(LoadErrorKind::MalformedHeader(
                    header.to_string(),
                )));
            }
        };
        debug!(%empty, %path, "Header parsed");

        let mut rows: Vec<&str> = lines.collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            return Err(LoadError::new(LoadErrorKind::NoRows));
        }

        let classify = |c: char| {
            if c == empty {
                Cell::Empty
            } else if c == path {
                Cell::Path
            } else {
                Cell::Blocked
            }
        };

        let inner_width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let ring = vec![Cell::Blocked; inner_width + 2];

        let mut grid = Vec::with_capacity(rows.len() + 2);
        grid.push(ring.clone());
        for row in rows {
            let mut cells = Vec::with_capacity(inner_width + 2);
            cells.push(Cell::Blocked);
            cells.extend(row.chars().map(classify));
            cells.resize(inner_width + 1, Cell::Blocked);
            cells.push(Cell::Blocked);
            grid.push(cells);
        }
        grid.push(ring);

        let board = Board::from_rows(grid);
        info!(
            width = board.width(),
            height = board.height(),
            "Board description parsed"
        );
        Ok(board)
    }

    /// Reads and parses a board description from any reader.
    ///
    /// # Errors
    ///
    /// Returns [`LoadErrorKind::Io`] if reading fails, otherwise as [`BoardLoader::parse`].
    #[instrument(skip(reader))]
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Board, LoadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Loads a board description from a file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadErrorKind::Io`] if the file cannot be opened or read,
    /// otherwise as [`BoardLoader::parse`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Board, LoadError> {
        debug!("Loading board file");
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }
}

impl FromStr for Board {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoardLoader::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    #[test]
    fn test_header_needs_two_glyphs() {
        let err = BoardLoader::parse(".\n...\n").unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::MalformedHeader(_)));
    }

    #[test]
    fn test_header_glyphs_must_differ() {
        let err = BoardLoader::parse("..\n...\n").unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::MalformedHeader(_)));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = BoardLoader::parse("\n\n").unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::MalformedHeader(_)));
    }

    #[test]
    fn test_header_without_rows() {
        let err = BoardLoader::parse(".#\n\n").unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::NoRows));
    }

    #[test]
    fn test_leading_blank_lines_skipped() {
        let board = BoardLoader::parse("\n\n.#extra\n..\n").unwrap();
        assert_eq!((board.width(), board.height()), (4, 3));
        assert_eq!(board.get(Position::new(1, 1)), Ok(Cell::Empty));
    }

    #[test]
    fn test_crlf_rows() {
        let board = BoardLoader::parse(".#\r\n.x\r\n").unwrap();
        assert_eq!((board.width(), board.height()), (4, 3));
        assert_eq!(board.get(Position::new(2, 1)), Ok(Cell::Blocked));
    }

    #[test]
    fn test_from_str() {
        let board: Board = ".#\n.\n".parse().unwrap();
        assert_eq!(board.get(Position::new(1, 1)), Ok(Cell::Empty));
    }

    #[test]
    fn test_from_reader_accepts_plain_reader() {
        let bytes: &[u8] = b".#\n..\n";
        let board = BoardLoader::from_reader(bytes).unwrap();
        assert_eq!((board.width(), board.height()), (4, 3));
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'.', b'#', b'\n', 0xff, b'\n'];
        let err = BoardLoader::from_reader(bytes).unwrap_err();
        assert!(matches!(err.kind, LoadErrorKind::Io(_)));
    }
}
