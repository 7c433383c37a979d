use std::env;

use anyhow::{Context, Result};
use boggle_check::{
    config::{Config, OutputFormat},
    utils::samples::sample_sets,
    Board, PathFinder, QueryResult,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; results go to stdout, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_check=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting boggle word check...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    match &config.board.path {
        Some(path) => {
            let board = Board::load(path, config.board.rows, config.board.cols)
                .await
                .with_context(|| format!("Failed to load board from {}", path.display()))?;

            let words: Vec<String> = env::args().skip(1).collect();
            if words.is_empty() {
                tracing::warn!("No words given; pass the words to check as arguments");
            }

            for word in &words {
                let result = check(&config, &board, word);
                print_result(config.output, &result)?;
            }
        }
        None => {
            tracing::info!("No BOARD_PATH set, running the sample boards");

            let words: Vec<String> = env::args().skip(1).collect();
            if let Some(message) = ignored_words_warning(&words) {
                tracing::warn!("{}", message);
            }

            for (board, queries) in sample_sets() {
                if config.output == OutputFormat::Text {
                    println!("{}\n", board);
                }

                for query in queries {
                    let result = check(&config, board, query.word);
                    if result.found != query.expected {
                        tracing::warn!(
                            "{} expected {} but got {}",
                            query.word,
                            query.expected,
                            result.found
                        );
                    }
                    print_result(config.output, &result)?;
                }

                if config.output == OutputFormat::Text {
                    println!();
                }
            }
        }
    }

    Ok(())
}

/// Words on the command line are only checked against a board loaded from BOARD_PATH
fn ignored_words_warning(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(format!(
            "Ignoring {} word(s) given without BOARD_PATH: {}",
            words.len(),
            words.join(" ")
        ))
    }
}

fn check(config: &Config, board: &Board, word: &str) -> QueryResult {
    let path = PathFinder::new(board)
        .ignore_case(config.search.ignore_case)
        .find_path(word);

    tracing::debug!("Checked {}: {:?}", word, path);

    QueryResult::new(word, path)
}

fn print_result(format: OutputFormat, result: &QueryResult) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}: {}", result.word, result.found),
        OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_warning_without_words() {
        assert_eq!(ignored_words_warning(&[]), None);
    }

    #[test]
    fn test_warning_lists_ignored_words() {
        let words = vec!["NOON".to_string(), "CANON".to_string()];
        let message = ignored_words_warning(&words).unwrap();
        assert!(message.contains("2 word(s)"));
        assert!(message.contains("NOON CANON"));
        assert!(message.contains("BOARD_PATH"));
    }
}
