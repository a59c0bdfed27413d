//! Tests for board description loading.

use std::io::Write;

use gridline_core::{BoardLoader, Cell, LoadErrorKind, Position};

#[test]
fn test_bordered_square_with_path_center() {
    let board = BoardLoader::parse(".#\n...\n.#.\n...\n").expect("valid board");

    assert_eq!(board.width(), 5);
    assert_eq!(board.height(), 5);
    assert_eq!(board.get(Position::new(2, 2)), Ok(Cell::Path));

    for pos in board.positions() {
        let on_ring = pos.x == 0 || pos.y == 0 || pos.x == 4 || pos.y == 4;
        let cell = board.get(pos).unwrap();
        if on_ring {
            assert_eq!(cell, Cell::Blocked, "ring cell {pos} not blocked");
        } else if pos != Position::new(2, 2) {
            assert_eq!(cell, Cell::Empty, "interior cell {pos} not empty");
        }
    }
}

#[test]
fn test_ragged_rows_padded_with_blocked() {
    // Plus shape: the short rows end before the right column.
    let board = BoardLoader::parse(".#\n .\n...\n .\n").unwrap();

    assert_eq!((board.width(), board.height()), (5, 5));
    assert_eq!(board.get(Position::new(1, 1)), Ok(Cell::Blocked));
    assert_eq!(board.get(Position::new(2, 1)), Ok(Cell::Empty));
    assert_eq!(board.get(Position::new(3, 1)), Ok(Cell::Blocked));
    assert_eq!(board.get(Position::new(3, 2)), Ok(Cell::Empty));
    assert!(board.rows().all(|row| row.len() == 5));
}

#[test]
fn test_unknown_glyphs_are_blocked() {
    let board = BoardLoader::parse("ox\nozx?\n").unwrap();
    assert_eq!(board.get(Position::new(1, 1)), Ok(Cell::Empty));
    assert_eq!(board.get(Position::new(2, 1)), Ok(Cell::Blocked));
    assert_eq!(board.get(Position::new(3, 1)), Ok(Cell::Path));
    assert_eq!(board.get(Position::new(4, 1)), Ok(Cell::Blocked));
}

#[test]
fn test_malformed_header() {
    let err = BoardLoader::parse("x\n...\n").unwrap_err();
    assert!(matches!(err.kind, LoadErrorKind::MalformedHeader(ref h) if h == "x"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, ".#\n..\n..\n").unwrap();

    let board = BoardLoader::from_file(file.path()).unwrap();
    assert_eq!((board.width(), board.height()), (4, 4));
    assert!(!board.is_full());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = BoardLoader::from_file(dir.path().join("missing.ttt")).unwrap_err();
    assert!(matches!(err.kind, LoadErrorKind::Io(_)));
}
