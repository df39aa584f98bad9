//! Seeded sampling helpers.
//!
//! Every choice in a reading is a pure function of an integer seed. The base
//! value comes from the fractional part of `sin(seed) * 10000`, which is
//! cheap and identical on every IEEE-754 platform for the same seed. It is
//! not a statistically strong generator and is not meant to be one.
//!
//! Independent-looking draws for different fields of the same reading are
//! obtained by adding small offsets to the base seed (`seed + 1`,
//! `seed + 2`, ...). Offsets are not true independence: two unrelated fields
//! that happen to use the same offset see correlated values, which is
//! acceptable here.

/// Fractional part of `sin(seed) * 10000`, in `[0, 1)`.
fn unit(seed: i64) -> f64 {
    // i64 -> f64 is exact for every seed derived from a 32-bit hash plus a
    // small offset.
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Draw an integer in `[min, max]` (inclusive) from `seed`.
///
/// # Panics
///
/// Panics if `min > max`. That is a caller defect, not a runtime condition.
pub fn sample(seed: i64, min: i64, max: i64) -> i64 {
    assert!(min <= max, "sample range is empty: {min}..={max}");
    let span = (max - min + 1) as f64;
    let value = (unit(seed) * span).floor() as i64 + min;
    // `x - floor(x)` can round up to exactly 1.0 for tiny negative x.
    value.min(max)
}

/// Index into a pool of `len` items using `|seed| % len`.
///
/// # Panics
///
/// Panics if `len` is zero.
pub fn index(seed: i64, len: usize) -> usize {
    assert!(len > 0, "cannot index an empty pool");
    (seed.unsigned_abs() % len as u64) as usize
}

/// Pick one element of `pool` by `|seed| % len`.
pub fn pick<T>(pool: &[T], seed: i64) -> &T {
    &pool[index(seed, pool.len())]
}

/// Stable seeded reordering of `items`, truncated to the first `k`.
///
/// Each position `i` gets the sort key `unit(seed + i)`; ties keep their
/// original order. The same `(items, seed)` always produces the same order.
pub fn shuffle_take<T>(items: &[T], seed: i64, k: usize) -> Vec<&T> {
    let mut keyed: Vec<(f64, &T)> = items
        .iter()
        .enumerate()
        .map(|(i, item)| (unit(seed + i as i64), item))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    keyed.into_iter().take(k).map(|(_, item)| item).collect()
}

/// Pick between `min` and `max` items (inclusive) from `items`.
///
/// The count is `min + |seed| % (max - min + 1)`, capped at `items.len()`.
pub fn select_between<T>(items: &[T], seed: i64, min: usize, max: usize) -> Vec<&T> {
    assert!(min <= max, "selection range is empty: {min}..={max}");
    let count = min + index(seed, max - min + 1);
    shuffle_take(items, seed, count.min(items.len()))
}
