use std::collections::BTreeSet;

use bw_gen::{packed_index, state_count, RatioTable};

fn brute_force_ratio(x: usize, y: usize) -> f64 {
    let num = state_count(x, y + 1).unwrap() as f64;
    let den = state_count(x, y).unwrap() as f64;
    num / den
}

#[test]
fn lookups_match_recurrence_for_small_tables() {
    for blocks in 1..=8 {
        let table = RatioTable::new(blocks).unwrap();
        for x in 0..=blocks {
            for y in 0..=(blocks - x) {
                let expected = brute_force_ratio(x, y);
                let actual = table.ratio(x, y);
                let rel = (actual - expected).abs() / expected;
                assert!(
                    rel < 1e-12,
                    "blocks={blocks} x={x} y={y}: {actual} vs {expected}"
                );
            }
        }
    }
}

#[test]
fn even_rows_are_read_directly() {
    let blocks = 7;
    let table = RatioTable::new(blocks).unwrap();
    for x in (0..=blocks).step_by(2) {
        for y in 0..=(blocks - x) {
            let stored = table.values()[packed_index(blocks, x / 2, y)];
            assert_eq!(table.ratio(x, y), stored);
        }
    }
}

#[test]
fn odd_rows_agree_with_neighbouring_even_row() {
    // R(x, y) rebuilt from row x - 1 must equal the ratio of exact counts.
    let table = RatioTable::new(6).unwrap();
    for x in (1..=6).step_by(2) {
        for y in 0..=(6 - x) {
            let below = table.ratio(x - 1, y);
            let below_next = table.ratio(x - 1, y + 1);
            let xy = (x + y) as f64;
            let rebuilt = below * (below_next + xy) / (below + xy - 1.0);
            assert!((table.ratio(x, y) - rebuilt).abs() < 1e-12);
        }
    }
}

#[test]
fn row_zero_is_all_ones() {
    let table = RatioTable::new(5).unwrap();
    for y in 0..=5 {
        assert_eq!(table.ratio(0, y), 1.0);
    }
}

#[test]
fn packed_index_is_injective_and_dense() {
    for blocks in 1..=12 {
        let mut seen = BTreeSet::new();
        for row in 0..=blocks / 2 {
            for col in 0..=(blocks - 2 * row) {
                assert!(seen.insert(packed_index(blocks, row, col)));
            }
        }
        let table = RatioTable::new(blocks).unwrap();
        assert_eq!(seen.len(), table.values().len());
        assert_eq!(seen.iter().next_back().copied(), Some(table.values().len() - 1));
    }
}

#[test]
fn zero_blocks_is_rejected() {
    let err = RatioTable::new(0).unwrap_err();
    assert_eq!(err.code(), "empty-world");
}

#[test]
fn large_tables_stay_finite() {
    let table = RatioTable::new(400).unwrap();
    assert!(table.values().iter().all(|v| v.is_finite() && *v > 0.0));
    assert!(table.ratio(399, 1).is_finite());
}

#[test]
fn oversized_tables_are_rejected() {
    let err = RatioTable::new(usize::MAX).unwrap_err();
    assert_eq!(err.code(), "too-many-blocks");
    assert_eq!(
        err.info().context.get("blocks").map(String::as_str),
        Some(usize::MAX.to_string().as_str())
    );

    let err = RatioTable::new(usize::MAX / 4).unwrap_err();
    assert_eq!(err.code(), "too-many-blocks");
}
