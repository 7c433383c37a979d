use crate::{
    game::board::Board,
    models::{Direction, Position},
};

/// Can `word` be traced on `board` through orthogonally adjacent, unused tiles?
pub fn find(board: &Board, word: &str) -> bool {
    PathFinder::new(board).contains(word)
}

/// Like [`find`], but returns the first path discovered
pub fn find_path(board: &Board, word: &str) -> Option<Vec<Position>> {
    PathFinder::new(board).find_path(word)
}

/// Tiles already used on the path currently being explored
struct VisitMask {
    cells: Vec<bool>,
}

impl VisitMask {
    fn new(len: usize) -> Self {
        Self {
            cells: vec![false; len],
        }
    }

    fn reset(&mut self) {
        self.cells.fill(false);
    }
}

/// Backtracking depth-first search for words on a board.
///
/// Every tile is tried as a starting point in row-major order. From each
/// tile the neighbours are explored east, south, west, then north, so the
/// path returned for a given board and word is always the same.
pub struct PathFinder<'a> {
    board: &'a Board,
    ignore_case: bool,
}

impl<'a> PathFinder<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            ignore_case: false,
        }
    }

    /// Compare tiles case-insensitively (matching is exact by default)
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.find_path(word).is_some()
    }

    /// First path spelling `word`, or `None`.
    ///
    /// The empty word is trivially found with an empty path.
    pub fn find_path(&self, word: &str) -> Option<Vec<Position>> {
        let letters: Vec<char> = word.chars().collect();
        if letters.is_empty() {
            return Some(Vec::new());
        }

        // A path never revisits a tile, so it can't be longer than the board
        if letters.len() > self.board.len() {
            tracing::debug!(
                "Word {:?} has {} letters but the board only has {} tiles",
                word,
                letters.len(),
                self.board.len()
            );
            return None;
        }

        let mut visited = VisitMask::new(self.board.len());
        let mut path = Vec::with_capacity(letters.len());

        for start in self.board.positions() {
            visited.reset();
            path.clear();

            if self.search(&letters, start, 0, &mut visited, &mut path) {
                tracing::trace!(
                    "Found {:?} starting at ({}, {})",
                    word,
                    start.row,
                    start.col
                );
                return Some(path);
            }
        }

        None
    }

    /// Try to match `letters[index..]` with the path continuing at `pos`
    fn search(
        &self,
        letters: &[char],
        pos: Position,
        index: usize,
        visited: &mut VisitMask,
        path: &mut Vec<Position>,
    ) -> bool {
        let cell = self.board.index(pos);
        if visited.cells[cell] {
            return false;
        }
        match self.board.get(pos) {
            Some(tile) if self.matches(tile, letters[index]) => {}
            _ => return false,
        }

        visited.cells[cell] = true;
        path.push(pos);

        if index + 1 == letters.len() {
            return true;
        }

        for direction in Direction::ALL {
            if let Some(next) = direction.step(pos, self.board.rows(), self.board.cols()) {
                if self.search(letters, next, index + 1, visited, path) {
                    return true;
                }
            }
        }

        // Backtrack
        path.pop();
        visited.cells[cell] = false;
        false
    }

    fn matches(&self, tile: char, letter: char) -> bool {
        if self.ignore_case {
            tile == letter || tile.to_lowercase().eq(letter.to_lowercase())
        } else {
            tile == letter
        }
    }
}
