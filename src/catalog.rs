//! Board catalog: scans a directory for `.ttt` board files.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridline_core::{Board, BoardLoader};
use tracing::{debug, info, instrument, warn};

/// File extension of board descriptions.
pub const BOARD_EXTENSION: &str = "ttt";

/// A named board loaded from disk.
#[derive(Debug, Clone, Getters, derive_new::new)]
pub struct BoardEntry {
    /// File name without the extension.
    name: String,
    /// The parsed board.
    board: Board,
}

/// Boards available for play, sorted by name.
///
/// Use [`BoardCatalog::scan`] to load from a directory.
#[derive(Debug, Clone)]
pub struct BoardCatalog {
    entries: Vec<BoardEntry>,
}

impl BoardCatalog {
    /// Scans `dir_path` for `*.ttt` files and loads each as a [`Board`].
    ///
    /// Files that fail to parse are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the path does not exist, is not a
    /// directory, cannot be read, or yields no valid board.
    #[instrument(skip(dir_path), fields(path = %dir_path.as_ref().display()))]
    pub fn scan(dir_path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = dir_path.as_ref();
        info!(path = %path.display(), "Scanning directory for boards");

        if !path.is_dir() {
            return Err(CatalogError::new(format!(
                "Board directory not found: {}",
                path.display()
            )));
        }

        let entries = std::fs::read_dir(path).map_err(|e| {
            CatalogError::new(format!(
                "Failed to read directory {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut boards = Vec::new();

        for entry_result in entries {
            let entry = entry_result
                .map_err(|e| CatalogError::new(format!("Failed to read directory entry: {}", e)))?;

            let entry_path = entry.path();

            if !entry_path.is_file()
                || entry_path.extension().and_then(|s| s.to_str()) != Some(BOARD_EXTENSION)
            {
                debug!(path = %entry_path.display(), "Skipping non-board entry");
                continue;
            }

            let Some(name) = entry_path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %entry_path.display(), "Skipping board with non-UTF-8 name");
                continue;
            };

            match BoardLoader::from_file(&entry_path) {
                Ok(board) => {
                    info!(
                        name,
                        width = board.width(),
                        height = board.height(),
                        "Loaded board"
                    );
                    boards.push(BoardEntry::new(name.to_string(), board));
                }
                Err(e) => {
                    warn!(
                        path = %entry_path.display(),
                        error = %e,
                        "Skipping invalid board file"
                    );
                }
            }
        }

        if boards.is_empty() {
            return Err(CatalogError::new(format!(
                "No valid .{} boards in {}",
                BOARD_EXTENSION,
                path.display()
            )));
        }

        boards.sort_by(|a, b| a.name.cmp(&b.name));
        info!(count = boards.len(), "Board catalog ready");
        Ok(Self { entries: boards })
    }

    /// Returns the boards in display order.
    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    /// Returns the board at `index`.
    pub fn get(&self, index: usize) -> Option<&BoardEntry> {
        self.entries.get(index)
    }

    /// Returns the number of boards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog holds no board.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest board name, for column layout.
    pub fn longest_name(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Board catalog error.
#[derive(Debug, Clone, Display, Error)]
#[display("Catalog error: {} at {}:{}", message, file, line)]
pub struct CatalogError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl CatalogError {
    /// Creates a new catalog error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
