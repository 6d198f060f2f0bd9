use std::sync::Arc;

use bw_core::{derive_substream_seed, BwError, Configuration};
use rayon::prelude::*;

use crate::generator::UniformStateSampler;
use crate::ratio::RatioTable;

/// Draws `shards * per_shard` configurations on the rayon pool.
///
/// Shard `i` runs its own sampler seeded with `derive_substream_seed(seed, i)`
/// over the shared table. Output is shard-major, so it does not depend on the
/// number of worker threads.
pub fn sample_sharded(
    table: Arc<RatioTable>,
    seed: u64,
    shards: usize,
    per_shard: usize,
) -> Result<Vec<Configuration>, BwError> {
    let batches = (0..shards)
        .into_par_iter()
        .map(|shard| {
            let mut sampler = UniformStateSampler::from_table(
                Arc::clone(&table),
                derive_substream_seed(seed, shard as u64),
            );
            sampler.sample(per_shard)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(batches.into_iter().flatten().collect())
}
