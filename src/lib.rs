//! Check whether a word can be traced on a letter grid by stepping between
//! horizontally or vertically adjacent tiles, never using a tile twice.

pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod utils;

pub use error::BoardError;
pub use game::{find, find_path, Board, PathFinder, PathValidator};
pub use models::{Direction, Position, QueryResult};
