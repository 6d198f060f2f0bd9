#![deny(missing_docs)]
#![doc = "Core data types shared by the blocks-world generator, world model and CLI."]

pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{BwError, ErrorInfo};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{BlockId, Configuration};
