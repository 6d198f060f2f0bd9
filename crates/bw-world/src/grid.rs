use serde::{Deserialize, Serialize};

/// X coordinate of stack 0.
pub const GRID_ORIGIN_X: i32 = -500;
/// Z coordinate of stack 0.
pub const GRID_ORIGIN_Z: i32 = 500;
/// Distance between neighbouring stacks.
pub const GRID_SPACING: i32 = 150;
/// Stacks per grid row.
pub const STACKS_PER_ROW: usize = 8;

/// Table position of a stack on the `x`/`z` plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    /// Left to right.
    pub x: i32,
    /// Front to rear, decreasing.
    pub z: i32,
}

/// Position of stack `stack`. Stacks are numbered from the front left, eight per row.
pub fn table_position(stack: usize) -> GridPosition {
    let column = (stack % STACKS_PER_ROW) as i32;
    let row = (stack / STACKS_PER_ROW) as i32;
    GridPosition {
        x: GRID_ORIGIN_X + column * GRID_SPACING,
        z: GRID_ORIGIN_Z - row * GRID_SPACING,
    }
}

/// Inverse of [`table_position`]; `None` for points outside the grid.
pub fn stack_at(position: GridPosition) -> Option<usize> {
    let dx = position.x - GRID_ORIGIN_X;
    let dz = GRID_ORIGIN_Z - position.z;
    if dx < 0 || dz < 0 || dx % GRID_SPACING != 0 || dz % GRID_SPACING != 0 {
        return None;
    }
    let column = (dx / GRID_SPACING) as usize;
    if column >= STACKS_PER_ROW {
        return None;
    }
    Some((dz / GRID_SPACING) as usize * STACKS_PER_ROW + column)
}
