use serde::{Deserialize, Serialize};

/// A tile coordinate, `(0, 0)` being the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// Orthogonal moves between tiles. Diagonals are never a legal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    South,
    West,
    North,
}

impl Direction {
    /// Exploration order used by the path search
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
    ];

    /// Row and column delta of a single step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::North => (-1, 0),
        }
    }

    /// Move one tile from `pos`, or `None` if that leaves a `rows` x `cols` board.
    pub fn step(self, pos: Position, rows: usize, cols: usize) -> Option<Position> {
        let (dr, dc) = self.delta();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;

        if row < rows && col < cols {
            Some(Position { row, col })
        } else {
            None
        }
    }
}
