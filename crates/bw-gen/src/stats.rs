use std::fmt;

use bw_core::Configuration;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default number of raw counts included in a summary.
pub const DEFAULT_RAW_LIMIT: usize = 100;

/// Message reported when statistics were requested from a sampler built without them.
pub const STATISTICS_DISABLED: &str = "No statistics are available. Must be enabled at startup.";

/// Occurrence counts per distinct configuration, in first-seen order.
///
/// Diagnostic only: the sampler's output does not depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateStatistics {
    counts: IndexMap<String, u64>,
    samples: u64,
}

impl StateStatistics {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `state`.
    pub fn record(&mut self, state: &Configuration) {
        *self.counts.entry(state.to_string()).or_insert(0) += 1;
        self.samples += 1;
    }

    /// Number of distinct configurations seen.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Total number of recorded samples.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Occurrences of the configuration rendered as `state` (comma separated).
    pub fn count(&self, state: &str) -> u64 {
        self.counts.get(state).copied().unwrap_or(0)
    }

    /// Iterates `(state, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(state, &count)| (state.as_str(), count))
    }

    /// Summarises the observed distribution. `None` until something is recorded.
    pub fn summary(&self, raw_limit: usize) -> Option<StatisticsSummary> {
        if self.samples == 0 {
            return None;
        }
        let total = self.samples as f64;
        let mut min_frequency = 1.0f64;
        let mut max_frequency = 0.0f64;
        for &count in self.counts.values() {
            let frequency = count as f64 / total;
            min_frequency = min_frequency.min(frequency);
            max_frequency = max_frequency.max(frequency);
        }
        Some(StatisticsSummary {
            states: self.counts.len(),
            samples: self.samples,
            expectancy: 1.0 / self.counts.len() as f64,
            min_frequency,
            max_frequency,
            raw_limit,
            raw_counts: self.counts.values().copied().take(raw_limit).collect(),
        })
    }

    /// Pearson's chi-square statistic against the uniform distribution over
    /// `total_states` configurations. Unseen states count with observed zero.
    pub fn chi_square(&self, total_states: u128) -> Option<f64> {
        if self.samples == 0 || total_states == 0 {
            return None;
        }
        let expected = self.samples as f64 / total_states as f64;
        let seen: f64 = self
            .counts
            .values()
            .map(|&count| {
                let delta = count as f64 - expected;
                delta * delta / expected
            })
            .sum();
        let unseen = total_states.saturating_sub(self.counts.len() as u128) as f64;
        Some(seen + unseen * expected)
    }
}

/// Snapshot of a [`StateStatistics`] accumulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// Number of distinct configurations observed.
    pub states: usize,
    /// Number of configurations drawn.
    pub samples: u64,
    /// Frequency each observed state would have under a uniform draw.
    pub expectancy: f64,
    /// Lowest observed frequency.
    pub min_frequency: f64,
    /// Highest observed frequency.
    pub max_frequency: f64,
    /// Cap applied to `raw_counts`.
    pub raw_limit: usize,
    /// First `raw_limit` counts in first-seen order.
    pub raw_counts: Vec<u64>,
}

impl fmt::Display for StatisticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "states={:05}, expectancy={:6.4}, actual range=[{:6.4},{:6.4}], raw{}=[ ",
            self.states, self.expectancy, self.min_frequency, self.max_frequency, self.raw_limit
        )?;
        for count in &self.raw_counts {
            write!(f, "{count} ")?;
        }
        write!(f, "]")
    }
}
