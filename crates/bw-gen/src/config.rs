use std::fs;
use std::path::Path;

use bw_core::{BwError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::stats::DEFAULT_RAW_LIMIT;

/// YAML-configurable parameters for a generator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of blocks per configuration.
    pub blocks: usize,
    /// Master seed; negative values are reinterpreted bit for bit.
    #[serde(default)]
    pub seed: i64,
    /// Number of configurations to draw.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Separator placed between entries of a configuration.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Whether to accumulate per-state counts.
    #[serde(default)]
    pub statistics: bool,
    /// Number of raw counts kept in the statistics summary.
    #[serde(default = "default_raw_limit")]
    pub raw_limit: usize,
    /// Number of independent substreams. `1` draws from the master seed directly.
    #[serde(default = "default_shards")]
    pub shards: usize,
}

fn default_iterations() -> usize {
    1
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_raw_limit() -> usize {
    DEFAULT_RAW_LIMIT
}

fn default_shards() -> usize {
    1
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            blocks: 8,
            seed: 0,
            iterations: default_iterations(),
            delimiter: default_delimiter(),
            statistics: false,
            raw_limit: default_raw_limit(),
            shards: default_shards(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a configuration from YAML and validates it.
    pub fn from_yaml_str(contents: &str) -> Result<Self, BwError> {
        let config: Self = serde_yaml::from_str(contents).map_err(|err| {
            BwError::Serde(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, BwError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            BwError::Serde(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            BwError::Serde(info) => {
                BwError::Serde(info.with_context("path", path.display().to_string()))
            }
            other => other,
        })
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), BwError> {
        if self.blocks == 0 {
            return Err(BwError::Config(
                ErrorInfo::new("empty-world", "the generator needs at least one block")
                    .with_context("blocks", "0"),
            ));
        }
        if self.shards == 0 {
            return Err(BwError::Config(ErrorInfo::new(
                "invalid-shards",
                "at least one shard is required",
            )));
        }
        if self.shards > 1 && self.iterations % self.shards != 0 {
            return Err(BwError::Config(
                ErrorInfo::new(
                    "uneven-shards",
                    "iterations must be a multiple of the shard count",
                )
                .with_context("iterations", self.iterations.to_string())
                .with_context("shards", self.shards.to_string()),
            ));
        }
        if self.delimiter.is_empty() {
            return Err(BwError::Config(
                ErrorInfo::new("empty-delimiter", "the delimiter must not be empty")
                    .with_hint("use \",\" for the community format"),
            ));
        }
        Ok(())
    }

    /// Seed as consumed by the RNG.
    pub fn rng_seed(&self) -> u64 {
        self.seed as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let config = GeneratorConfig::from_yaml_str("blocks: 5\n").unwrap();
        assert_eq!(config.blocks, 5);
        assert_eq!(config.seed, 0);
        assert_eq!(config.iterations, 1);
        assert_eq!(config.delimiter, ",");
        assert!(!config.statistics);
        assert_eq!(config.raw_limit, DEFAULT_RAW_LIMIT);
        assert_eq!(config.shards, 1);
    }

    #[test]
    fn rejects_zero_blocks() {
        let err = GeneratorConfig::from_yaml_str("blocks: 0\n").unwrap_err();
        assert_eq!(err.code(), "empty-world");
    }

    #[test]
    fn rejects_uneven_shards() {
        let yaml = "blocks: 3\niterations: 10\nshards: 3\n";
        let err = GeneratorConfig::from_yaml_str(yaml).unwrap_err();
        assert_eq!(err.code(), "uneven-shards");
    }

    #[test]
    fn reports_yaml_errors() {
        let err = GeneratorConfig::from_yaml_str("blocks: many\n").unwrap_err();
        assert_eq!(err.code(), "config-parse");
    }

    #[test]
    fn negative_seed_keeps_bits() {
        let config = GeneratorConfig {
            seed: -1,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.rng_seed(), u64::MAX);
    }
}
