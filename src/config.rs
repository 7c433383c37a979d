use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{env, path::PathBuf, str::FromStr};

use crate::game::BOARD_SIZE;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub board: BoardConfig,
    pub search: SearchConfig,
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Board file to check words against; the built-in samples run when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub ignore_case: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("unknown output format '{}' (expected text or json)", other),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any variable source
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let board = BoardConfig {
            rows: var("BOARD_ROWS")
                .unwrap_or_else(|| BOARD_SIZE.to_string())
                .parse()
                .context("BOARD_ROWS must be a number")?,
            cols: var("BOARD_COLS")
                .unwrap_or_else(|| BOARD_SIZE.to_string())
                .parse()
                .context("BOARD_COLS must be a number")?,
            path: var("BOARD_PATH")
                .filter(|path| !path.trim().is_empty())
                .map(PathBuf::from),
        };

        if board.rows == 0 || board.cols == 0 {
            bail!(
                "BOARD_ROWS and BOARD_COLS must be at least 1 (got {}x{})",
                board.rows,
                board.cols
            );
        }
        if board.rows.checked_mul(board.cols).is_none() {
            bail!(
                "BOARD_ROWS x BOARD_COLS is too large (got {}x{})",
                board.rows,
                board.cols
            );
        }

        let search = SearchConfig {
            ignore_case: var("IGNORE_CASE")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("IGNORE_CASE must be true or false")?,
        };

        let output = var("OUTPUT_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .parse()
            .context("OUTPUT_FORMAT must be text or json")?;

        Ok(Config {
            board,
            search,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.board.rows, 5);
        assert_eq!(config.board.cols, 5);
        assert!(config.board.path.is_none());
        assert!(!config.search.ignore_case);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BOARD_ROWS", "4"),
            ("BOARD_COLS", "6"),
            ("BOARD_PATH", "boards/office.txt"),
            ("IGNORE_CASE", "true"),
            ("OUTPUT_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.board.rows, 4);
        assert_eq!(config.board.cols, 6);
        assert_eq!(config.board.path, Some(PathBuf::from("boards/office.txt")));
        assert!(config.search.ignore_case);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_blank_board_path_is_unset() {
        let config = config_from(&[("BOARD_PATH", "  ")]).unwrap();
        assert!(config.board.path.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let err = config_from(&[("BOARD_ROWS", "five")]).unwrap_err();
        assert!(err.to_string().contains("BOARD_ROWS must be a number"));

        assert!(config_from(&[("BOARD_COLS", "0")]).is_err());
        assert!(config_from(&[("IGNORE_CASE", "sometimes")]).is_err());
        assert!(config_from(&[("OUTPUT_FORMAT", "xml")]).is_err());
    }

    #[test]
    fn test_rejects_overflowing_board_size() {
        let max = usize::MAX.to_string();
        let err = config_from(&[("BOARD_ROWS", max.as_str()), ("BOARD_COLS", "2")]).unwrap_err();
        assert!(err.to_string().contains("too large"));

        assert!(config_from(&[("BOARD_ROWS", max.as_str()), ("BOARD_COLS", "1")]).is_ok());
    }
}
