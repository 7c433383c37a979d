use serde::{Deserialize, Serialize};

use super::Position;

/// Outcome of looking up one word on a board
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryResult {
    pub word: String,
    pub found: bool,
    /// Tiles spelling the word, in order, when found
    pub path: Option<Vec<Position>>,
}

impl QueryResult {
    pub fn new(word: impl Into<String>, path: Option<Vec<Position>>) -> Self {
        Self {
            word: word.into(),
            found: path.is_some(),
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let found = QueryResult::new("AB", Some(vec![Position::new(0, 0), Position::new(0, 1)]));
        assert_eq!(
            serde_json::to_string(&found).unwrap(),
            r#"{"word":"AB","found":true,"path":[{"row":0,"col":0},{"row":0,"col":1}]}"#
        );

        let missing = QueryResult::new("ZZ", None);
        assert!(!missing.found);
        assert_eq!(
            serde_json::to_string(&missing).unwrap(),
            r#"{"word":"ZZ","found":false,"path":null}"#
        );
    }
}
