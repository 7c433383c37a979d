use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tokio::fs;

use crate::{error::BoardError, models::Position};

/// Width and height of the standard board
pub const BOARD_SIZE: usize = 5;

/// An immutable rectangular grid of single-character tiles, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<char>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Parse whitespace-separated tiles into a `rows` x `cols` board.
    ///
    /// Any whitespace separates tiles, so a multi-line layout works as well as
    /// a single line. The tile count must match the dimensions exactly.
    pub fn parse(input: &str, rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyDimensions { rows, cols });
        }

        let expected = Self::tile_count(rows, cols)?;
        let tiles = Self::tokenize(input)?;
        if tiles.len() != expected {
            return Err(BoardError::TileCount {
                rows,
                cols,
                expected,
                found: tiles.len(),
            });
        }

        Ok(Self { tiles, rows, cols })
    }

    /// Parse a board of fixed width, inferring the number of rows from the tile count
    pub fn parse_with_width(input: &str, cols: usize) -> Result<Self, BoardError> {
        if cols == 0 {
            return Err(BoardError::EmptyDimensions { rows: 0, cols });
        }

        let tiles = Self::tokenize(input)?;
        if tiles.is_empty() || tiles.len() % cols != 0 {
            let rows = tiles.len().div_ceil(cols).max(1);
            return Err(BoardError::TileCount {
                rows,
                cols,
                expected: Self::tile_count(rows, cols)?,
                found: tiles.len(),
            });
        }

        let rows = tiles.len() / cols;
        Ok(Self { tiles, rows, cols })
    }

    /// Build a board from explicit rows, which must all have the same length
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(BoardError::EmptyDimensions {
                rows: height,
                cols: width,
            });
        }

        let mut tiles = Vec::with_capacity(Self::tile_count(height, width)?);
        for (index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RaggedRow {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            tiles.extend(row);
        }

        Ok(Self {
            tiles,
            rows: height,
            cols: width,
        })
    }

    /// Load a board from a file
    pub async fn load<P: AsRef<Path>>(path: P, rows: usize, cols: usize) -> Result<Self, BoardError> {
        let content = fs::read_to_string(path.as_ref()).await?;
        let board = Self::parse(&content, rows, cols)?;

        tracing::info!(
            "Loaded {}x{} board from {}",
            board.rows,
            board.cols,
            path.as_ref().display()
        );

        Ok(board)
    }

    fn tile_count(rows: usize, cols: usize) -> Result<usize, BoardError> {
        rows.checked_mul(cols).ok_or(BoardError::TooLarge { rows, cols })
    }

    fn tokenize(input: &str) -> Result<Vec<char>, BoardError> {
        input
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                let mut chars = token.chars();
                match (chars.next(), chars.next()) {
                    (Some(tile), None) => Ok(tile),
                    _ => Err(BoardError::MultiCharTile {
                        index,
                        token: token.to_string(),
                    }),
                }
            })
            .collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tiles on the board
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at `pos`, or `None` when out of bounds
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self.tiles[self.index(pos)])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[char]> {
        if row < self.rows {
            let start = row * self.cols;
            Some(&self.tiles[start..start + self.cols])
        } else {
            None
        }
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.tiles.chunks(self.cols)
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position { row, col }))
    }

    pub fn contains_tile(&self, tile: char) -> bool {
        self.tiles.contains(&tile)
    }

    /// Row-major offset of `pos`. Callers must have checked bounds.
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, BOARD_SIZE, BOARD_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile)?;
            }
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows_iter())
    }
}
