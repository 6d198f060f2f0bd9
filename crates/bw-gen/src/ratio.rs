use bw_core::{BwError, ErrorInfo};

/// Packed index of `(row, col)` in a table built for `blocks` blocks.
///
/// Row `row` of the packed table holds the even recurrence row `2 * row`, whose
/// valid columns are `0..=blocks - 2 * row`; rows are laid out back to back.
pub fn packed_index(blocks: usize, row: usize, col: usize) -> usize {
    row * (blocks + 2 - row) + col
}

/// Precomputed ratios `g(n, k + 1) / g(n, k)` for the block counting recurrence
///
/// ```text
/// g(0, k)     = 1
/// g(n + 1, k) = g(n, k) * (n + k) + g(n, k + 1)
/// ```
///
/// where `g(n, k)` counts the states extending a partial state with `k` towers
/// already on the table and `n` floating towers. Only even rows are stored; odd
/// rows are rebuilt from the even row below them in [`RatioTable::ratio`].
#[derive(Debug, Clone, PartialEq)]
pub struct RatioTable {
    blocks: usize,
    values: Vec<f64>,
}

impl RatioTable {
    /// Builds the table for `blocks` blocks.
    pub fn new(blocks: usize) -> Result<Self, BwError> {
        if blocks == 0 {
            return Err(BwError::Config(
                ErrorInfo::new("empty-world", "the generator needs at least one block")
                    .with_context("blocks", "0"),
            ));
        }

        let len = table_len(blocks)
            .ok_or_else(|| too_many_blocks(blocks, "table size overflows usize"))?;
        let mut values = filled(len, 0.0, blocks)?;

        // Working row of the recurrence, updated in place from n - 1 to n. The
        // update of column k reads column k + 1 before it is overwritten.
        let width = blocks
            .checked_add(1)
            .ok_or_else(|| too_many_blocks(blocks, "row width overflows usize"))?;
        let mut temp = filled(width, 1.0, blocks)?;
        for k in 0..=blocks {
            values[packed_index(blocks, 0, k)] = 1.0;
        }
        for n in 1..=blocks {
            for k in 0..=(blocks - n) {
                let nk = (n + k) as f64;
                temp[k] = temp[k] * (temp[k + 1] + nk) / (temp[k] + nk - 1.0);
                if n % 2 == 0 {
                    values[packed_index(blocks, n / 2, k)] = temp[k];
                }
            }
        }

        tracing::debug!(blocks, entries = values.len(), "built ratio table");
        Ok(Self { blocks, values })
    }

    /// Number of blocks the table was built for.
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    /// Stored even-row values in packed order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns `g(x, y + 1) / g(x, y)` for `x + y <= blocks`.
    ///
    /// Odd rows use the identity
    /// `R(x, y) = (R(x-1, y+1) + x + y) / ((x + y - 1) / R(x-1, y) + 1)`
    /// obtained by dividing the recurrence through by `g(x - 1, y)`.
    pub fn ratio(&self, x: usize, y: usize) -> f64 {
        debug_assert!(x + y <= self.blocks, "ratio ({x}, {y}) outside the table");
        let z = packed_index(self.blocks, x / 2, y);
        if x % 2 == 1 {
            let xy = (x + y) as f64;
            (self.values[z + 1] + xy) / ((1.0 / self.values[z]) * (xy - 1.0) + 1.0)
        } else {
            self.values[z]
        }
    }
}

/// Number of packed entries for `blocks` blocks; `None` if it does not fit in `usize`.
fn table_len(blocks: usize) -> Option<usize> {
    let last_row = blocks / 2;
    (blocks - last_row)
        .checked_add(2)?
        .checked_mul(last_row)?
        .checked_add(blocks - 2 * last_row)?
        .checked_add(1)
}

fn filled(len: usize, value: f64, blocks: usize) -> Result<Vec<f64>, BwError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|err| too_many_blocks(blocks, err.to_string()))?;
    values.resize(len, value);
    Ok(values)
}

fn too_many_blocks(blocks: usize, reason: impl Into<String>) -> BwError {
    BwError::Config(
        ErrorInfo::new("too-many-blocks", reason)
            .with_context("blocks", blocks.to_string())
            .with_hint("the ratio table grows with the square of the block count"),
    )
}
