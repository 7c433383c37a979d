pub mod position;
pub mod query;

pub use position::{Direction, Position};
pub use query::QueryResult;
