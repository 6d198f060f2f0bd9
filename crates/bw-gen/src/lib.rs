#![deny(missing_docs)]

//! Uniform random generator for blocks-world configurations.
//!
//! The sampler follows John Slaney's construction: a table of ratios between
//! counts of partial states decides, block by block, whether a tower goes on
//! the table or on top of another tower, so that every complete state is drawn
//! with the same probability.

/// YAML configuration schema and defaults.
pub mod config;
/// Exact state-space counting.
pub mod count;
/// Sampler facade.
pub mod generator;
/// Run manifest serialization helpers.
pub mod manifest;
/// Packed ratio table.
pub mod ratio;
/// Configured runs combining sampling, sharding and statistics.
pub mod run;
mod sampler;
/// Parallel sampling over derived substreams.
pub mod shard;
/// Per-state frequency statistics.
pub mod stats;

pub use config::GeneratorConfig;
pub use count::{state_count, total_states};
pub use generator::UniformStateSampler;
pub use manifest::{states_digest, RunManifest};
pub use ratio::{packed_index, RatioTable};
pub use run::{run, RunOutput};
pub use shard::sample_sharded;
pub use stats::{StateStatistics, StatisticsSummary, DEFAULT_RAW_LIMIT, STATISTICS_DISABLED};
