/// Exact value of `g(n, k)`: the number of complete states extending a partial
/// state with `k` towers on the table and `n` floating towers.
///
/// Returns `None` once the count no longer fits in a `u128`.
pub fn state_count(n: usize, k: usize) -> Option<u128> {
    // g(n, k) >= (n - 1)! and 35! already exceeds u128::MAX.
    if n > 36 {
        return None;
    }
    let width = n.checked_add(k)?.checked_add(1)?;
    let mut row = vec![1u128; width];
    for i in 0..n {
        // Row i + 1 is only needed up to column n + k - i - 1.
        for j in 0..(width - i - 1) {
            let weight = u128::try_from(i + j).ok()?;
            row[j] = row[j].checked_mul(weight)?.checked_add(row[j + 1])?;
        }
    }
    Some(row[k])
}

/// Number of distinct configurations of `blocks` blocks (1, 3, 13, 73, 501, ...).
pub fn total_states(blocks: usize) -> Option<u128> {
    state_count(blocks, 0)
}
