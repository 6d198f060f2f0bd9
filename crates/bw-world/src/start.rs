use std::fs;
use std::path::{Path, PathBuf};

use bw_core::{BwError, Configuration, ErrorInfo};

/// Number of blocks in the default world.
pub const DEFAULT_BLOCKS: usize = 8;

/// Where the initial arrangement of a world comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartConfig {
    /// [`DEFAULT_BLOCKS`] blocks, all on the table.
    #[default]
    Default,
    /// Explicit support numbers.
    List(Vec<i64>),
    /// File of whitespace separated support numbers.
    File(PathBuf),
}

impl StartConfig {
    /// Resolves the start arrangement into a validated configuration.
    pub fn resolve(&self) -> Result<Configuration, BwError> {
        match self {
            StartConfig::Default => Configuration::all_on_table(DEFAULT_BLOCKS),
            StartConfig::List(values) => Configuration::from_signed(values),
            StartConfig::File(path) => Configuration::from_signed(&read_numbers(path)?),
        }
    }
}

/// Leading integers of `text`; reading stops at the first token that is not one.
pub fn parse_numbers(text: &str) -> Vec<i64> {
    text.split_whitespace()
        .map_while(|token| token.parse::<i64>().ok())
        .collect()
}

/// Reads the leading integers of the file at `path`.
pub fn read_numbers(path: &Path) -> Result<Vec<i64>, BwError> {
    let contents = fs::read_to_string(path).map_err(|err| {
        BwError::Serde(
            ErrorInfo::new("start-read", err.to_string())
                .with_context("path", path.display().to_string())
                .with_hint("failed to read initial configuration from file"),
        )
    })?;
    Ok(parse_numbers(&contents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_stops_at_first_non_number() {
        assert_eq!(parse_numbers("0 5 1\n0 4 0 end 3"), vec![0, 5, 1, 0, 4, 0]);
        assert!(parse_numbers("none").is_empty());
    }

    #[test]
    fn default_is_eight_blocks_on_table() {
        let config = StartConfig::default().resolve().unwrap();
        assert_eq!(config.as_slice(), &[0; DEFAULT_BLOCKS]);
    }

    #[test]
    fn negative_entries_are_rejected() {
        let err = StartConfig::List(vec![0, -2]).resolve().unwrap_err();
        assert_eq!(err.code(), "negative-support");
    }
}
