#![deny(missing_docs)]

//! Placement model for blocks-world configurations.
//!
//! A [`BlocksWorld`] is reset to a [`bw_core::Configuration`] by stacking every
//! block whose support is already placed until nothing is left, rejecting loops
//! and blocks that would share a support.

mod grid;
mod model;
mod start;

pub use grid::{
    stack_at, table_position, GridPosition, GRID_ORIGIN_X, GRID_ORIGIN_Z, GRID_SPACING,
    STACKS_PER_ROW,
};
pub use model::BlocksWorld;
pub use start::{parse_numbers, read_numbers, StartConfig, DEFAULT_BLOCKS};
