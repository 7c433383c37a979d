use once_cell::sync::Lazy;

use crate::game::Board;

pub const SAMPLE_LAYOUT: &str = "
    N C A N E
    O U I O P
    Z Q Z O N
    F A D P L
    E D E A Z
";

pub const SAMPLE_LAYOUT_2: &str = "
    E D O S Z
    N S O N R
    O U O O P
    Z Q Z O R
    F A D P L
";

/// Reference board used by the demo
pub static SAMPLE_BOARD: Lazy<Board> =
    Lazy::new(|| SAMPLE_LAYOUT.parse().expect("sample layout is a 5x5 board"));

/// Needs a long winding path through four O tiles
pub static SAMPLE_BOARD_2: Lazy<Board> =
    Lazy::new(|| SAMPLE_LAYOUT_2.parse().expect("sample layout is a 5x5 board"));

/// A demo query and its known answer
#[derive(Debug, Clone, Copy)]
pub struct SampleQuery {
    pub word: &'static str,
    pub expected: bool,
}

pub const SAMPLE_QUERIES: &[SampleQuery] = &[
    SampleQuery { word: "NOON", expected: true },
    SampleQuery { word: "NOPE", expected: true },
    SampleQuery { word: "CANON", expected: false },
    SampleQuery { word: "QUINE", expected: false },
    SampleQuery { word: "FADED", expected: true },
];

pub const SAMPLE_QUERIES_2: &[SampleQuery] = &[SampleQuery { word: "NOOOOS", expected: true }];

/// Each sample board paired with the queries run against it
pub fn sample_sets() -> [(&'static Board, &'static [SampleQuery]); 2] {
    [
        (&*SAMPLE_BOARD, SAMPLE_QUERIES),
        (&*SAMPLE_BOARD_2, SAMPLE_QUERIES_2),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::find;

    #[test]
    fn test_sample_boards_parse() {
        assert_eq!(SAMPLE_BOARD.len(), 25);
        assert_eq!(SAMPLE_BOARD_2.len(), 25);
        assert_eq!(SAMPLE_BOARD_2.row(1).unwrap(), &['N', 'S', 'O', 'N', 'R']);
    }

    #[test]
    fn test_sample_queries_match_expected() {
        for (board, queries) in sample_sets() {
            for query in queries {
                assert_eq!(
                    find(board, query.word),
                    query.expected,
                    "unexpected result for {}",
                    query.word
                );
            }
        }
    }
}
