use crate::{game::board::Board, models::Position};
use std::collections::HashSet;

pub struct PathValidator;

impl PathValidator {
    /// Validate that positions form a legal path on the board
    pub fn is_valid_path(board: &Board, positions: &[Position]) -> bool {
        if positions.is_empty() {
            return false;
        }

        // Check that all positions are within bounds
        if !positions
            .iter()
            .all(|pos| pos.row < board.rows() && pos.col < board.cols())
        {
            return false;
        }

        // Check that each position is adjacent to the previous one
        for window in positions.windows(2) {
            if !Self::are_adjacent(&window[0], &window[1]) {
                return false;
            }
        }

        // Check that no position is used twice
        let unique_positions: HashSet<_> = positions.iter().collect();
        unique_positions.len() == positions.len()
    }

    /// Check if two positions are adjacent (horizontally or vertically only)
    pub fn are_adjacent(pos1: &Position, pos2: &Position) -> bool {
        pos1.row.abs_diff(pos2.row) + pos1.col.abs_diff(pos2.col) == 1
    }

    /// Extract word from board positions
    pub fn extract_word(board: &Board, positions: &[Position]) -> Option<String> {
        positions.iter().map(|pos| board.get(*pos)).collect()
    }

    /// Check that positions form a legal path spelling exactly `word`
    pub fn spells(board: &Board, positions: &[Position], word: &str) -> bool {
        Self::is_valid_path(board, positions)
            && Self::extract_word(board, positions).as_deref() == Some(word)
    }
}
