use std::sync::Arc;

use bw_core::{BwError, Configuration, RngHandle};

use crate::ratio::RatioTable;
use crate::sampler::make_state;
use crate::stats::StateStatistics;

/// Uniform sampler over all blocks-world configurations of a fixed size.
///
/// The ratio table is built once and may be shared with other samplers through
/// [`UniformStateSampler::from_table`]; the RNG is owned exclusively.
#[derive(Debug, Clone)]
pub struct UniformStateSampler {
    table: Arc<RatioTable>,
    rng: RngHandle,
    seed: u64,
    statistics: Option<StateStatistics>,
}

impl UniformStateSampler {
    /// Creates a sampler for `blocks` blocks seeded with `seed`.
    pub fn new(blocks: usize, seed: u64) -> Result<Self, BwError> {
        let table = Arc::new(RatioTable::new(blocks)?);
        Ok(Self::from_table(table, seed))
    }

    /// Like [`UniformStateSampler::new`] but counts every emitted configuration.
    pub fn with_statistics(blocks: usize, seed: u64) -> Result<Self, BwError> {
        Ok(Self::new(blocks, seed)?.track_statistics())
    }

    /// Creates a sampler over an existing table.
    pub fn from_table(table: Arc<RatioTable>, seed: u64) -> Self {
        Self {
            table,
            rng: RngHandle::from_seed(seed),
            seed,
            statistics: None,
        }
    }

    /// Enables the statistics accumulator if it is not already running.
    pub fn track_statistics(mut self) -> Self {
        if self.statistics.is_none() {
            self.statistics = Some(StateStatistics::new());
        }
        self
    }

    /// Number of blocks per configuration.
    pub fn blocks(&self) -> usize {
        self.table.blocks()
    }

    /// Seed the sampler was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shared ratio table.
    pub fn table(&self) -> &Arc<RatioTable> {
        &self.table
    }

    /// Accumulated statistics, if enabled.
    pub fn statistics(&self) -> Option<&StateStatistics> {
        self.statistics.as_ref()
    }

    /// Draws the next configuration.
    pub fn next_state(&mut self) -> Result<Configuration, BwError> {
        let sigma = make_state(&self.table, &mut self.rng)?;
        let state = sigma.configuration()?;
        tracing::trace!(%state, rooted = sigma.rooted_towers(), "sampled state");
        if let Some(stats) = self.statistics.as_mut() {
            stats.record(&state);
        }
        Ok(state)
    }

    /// Draws `count` configurations.
    pub fn sample(&mut self, count: usize) -> Result<Vec<Configuration>, BwError> {
        (0..count).map(|_| self.next_state()).collect()
    }
}
