use std::sync::Arc;

use bw_core::{BwError, Configuration};

use crate::config::GeneratorConfig;
use crate::generator::UniformStateSampler;
use crate::ratio::RatioTable;
use crate::shard::sample_sharded;
use crate::stats::StateStatistics;

/// Configurations drawn by [`run`] together with optional statistics.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Configurations in emission order.
    pub states: Vec<Configuration>,
    /// Per-state counts when `statistics` was enabled.
    pub statistics: Option<StateStatistics>,
}

impl RunOutput {
    /// Renders every state on its own line using `delimiter`.
    pub fn render(&self, delimiter: &str) -> String {
        let mut out = String::new();
        for state in &self.states {
            out.push_str(&state.render(delimiter));
            out.push('\n');
        }
        out
    }
}

/// Executes a generator run described by `config`.
pub fn run(config: &GeneratorConfig) -> Result<RunOutput, BwError> {
    config.validate()?;
    tracing::debug!(
        blocks = config.blocks,
        seed = config.seed,
        iterations = config.iterations,
        shards = config.shards,
        "starting generator run"
    );

    if config.shards == 1 {
        let mut sampler = UniformStateSampler::new(config.blocks, config.rng_seed())?;
        if config.statistics {
            sampler = sampler.track_statistics();
        }
        let states = sampler.sample(config.iterations)?;
        return Ok(RunOutput {
            states,
            statistics: sampler.statistics().cloned(),
        });
    }

    let table = Arc::new(RatioTable::new(config.blocks)?);
    let states = sample_sharded(
        table,
        config.rng_seed(),
        config.shards,
        config.iterations / config.shards,
    )?;
    let statistics = config.statistics.then(|| {
        let mut stats = StateStatistics::new();
        for state in &states {
            stats.record(state);
        }
        stats
    });
    Ok(RunOutput { states, statistics })
}
