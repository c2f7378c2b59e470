//! Search algorithms over integer sequences
//!
//! Both searches return `Some(index)` of a matching element or `None` when the
//! target is absent. The harness maps `None` onto its "no result" outcome.

use tracing::trace;

/// Scan front to back and return the first index holding `target`. O(n).
pub fn linear_search(values: &[i64], target: i64) -> Option<usize> {
    for (index, &value) in values.iter().enumerate() {
        trace!(index, value, target, "linear_search compare");
        if value == target {
            return Some(index);
        }
    }
    None
}

/// Recursive halving search over an ascending slice. O(log n).
///
/// An exact match at the midpoint returns immediately, so with duplicate
/// targets any of the matching indices may be reported.
pub fn binary_search(values: &[i64], target: i64) -> Option<usize> {
    if values.is_empty() {
        return None;
    }
    binary_search_range(values, target, 0, values.len() as isize - 1)
}

fn binary_search_range(values: &[i64], target: i64, left: isize, right: isize) -> Option<usize> {
    if left > right {
        trace!(left, right, target, "binary_search exhausted");
        return None;
    }

    let middle = left + (right - left) / 2;
    let value = values[middle as usize];
    trace!(left, right, middle, value, target, "binary_search compare");

    if value < target {
        binary_search_range(values, target, middle + 1, right)
    } else if value > target {
        binary_search_range(values, target, left, middle - 1)
    } else {
        Some(middle as usize)
    }
}
