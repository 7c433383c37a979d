use thiserror::Error;

/// Reasons a board cannot be built from its input.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyDimensions { rows: usize, cols: usize },

    #[error("expected {expected} tiles for a {rows}x{cols} board, found {found}")]
    TileCount {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("a {rows}x{cols} board has more tiles than can be addressed")]
    TooLarge { rows: usize, cols: usize },

    #[error("tile {index} ('{token}') must be a single character")]
    MultiCharTile { index: usize, token: String },

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to read board: {0}")]
    Io(#[from] std::io::Error),
}
