pub mod board;
pub mod search;
pub mod validator;

pub use board::{Board, BOARD_SIZE};
pub use search::{find, find_path, PathFinder};
pub use validator::PathValidator;
