use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bw_core::{BwError, ErrorInfo, RunProvenance, SchemaVersion};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::GeneratorConfig;
use crate::count::total_states;
use crate::run::RunOutput;
use crate::stats::StatisticsSummary;

/// Structured manifest describing a completed generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    /// Manifest schema version.
    pub schema_version: SchemaVersion,
    /// Configuration used for the run.
    pub config: GeneratorConfig,
    /// Seed, digest and tool versions.
    pub provenance: RunProvenance,
    /// States file relative to the run directory.
    pub states_file: PathBuf,
    /// Exact size of the state space, as a decimal string, when it fits in 128 bits.
    pub total_states: Option<String>,
    /// Fraction of the state space observed, when statistics were collected.
    pub coverage: Option<f64>,
    /// Chi-square statistic against the uniform distribution.
    pub chi_square: Option<f64>,
    /// Statistics summary when enabled.
    pub statistics: Option<StatisticsSummary>,
}

impl RunManifest {
    /// Builds the manifest for `output`, produced from `config`.
    pub fn new(
        config: &GeneratorConfig,
        output: &RunOutput,
        states_file: impl Into<PathBuf>,
        created_at: impl Into<String>,
    ) -> Self {
        let total = total_states(config.blocks);
        let stats = output.statistics.as_ref();
        let coverage = stats
            .zip(total)
            .map(|(stats, total)| stats.distinct() as f64 / total as f64);
        let chi_square = stats.zip(total).and_then(|(stats, total)| stats.chi_square(total));

        let mut tool_versions = BTreeMap::new();
        tool_versions.insert("bw-gen".to_string(), env!("CARGO_PKG_VERSION").to_string());

        Self {
            schema_version: SchemaVersion::new(1, 0, 0),
            config: config.clone(),
            provenance: RunProvenance {
                blocks: config.blocks,
                seed: config.rng_seed(),
                output_hash: states_digest(&output.render(&config.delimiter)),
                created_at: created_at.into(),
                tool_versions,
            },
            states_file: states_file.into(),
            total_states: total.map(|count| count.to_string()),
            coverage,
            chi_square,
            statistics: stats.and_then(|stats| stats.summary(config.raw_limit)),
        }
    }

    /// Writes the manifest to a JSON file.
    pub fn write(&self, path: &Path) -> Result<(), BwError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                BwError::Serde(
                    ErrorInfo::new("manifest-mkdir", err.to_string())
                        .with_context("path", parent.display().to_string()),
                )
            })?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|err| {
            BwError::Serde(
                ErrorInfo::new("manifest-serialize", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        fs::write(path, json).map_err(|err| {
            BwError::Serde(
                ErrorInfo::new("manifest-write", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }

    /// Loads a manifest from disk.
    pub fn load(path: &Path) -> Result<Self, BwError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            BwError::Serde(
                ErrorInfo::new("manifest-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            BwError::Serde(
                ErrorInfo::new("manifest-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}

/// Hex SHA-256 of the rendered states.
pub fn states_digest(rendered: &str) -> String {
    hex::encode(Sha256::digest(rendered.as_bytes()))
}
