//! Sorting algorithms over integer sequences
//!
//! Every sort borrows its input and returns a new ascending `Vec`; the input
//! slice is never mutated. Swaps and comparisons are reported as `trace`
//! events so a subscriber can follow each step.

use std::cmp::Ordering;
use tracing::trace;

/// Repeated adjacent-swap passes until a pass makes no swap.
///
/// Each pass walks right to left so the smallest unplaced value bubbles to
/// the front. O(n²) worst case, O(n) on sorted input.
pub fn bubble_sort(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    if sorted.len() < 2 {
        return sorted;
    }

    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in (0..sorted.len() - 1).rev() {
            if sorted[i + 1] < sorted[i] {
                trace!(before = ?sorted, i, "bubble_sort swap");
                sorted.swap(i, i + 1);
                swapped = true;
            }
        }
    }
    sorted
}

/// Mirror of [`bubble_sort`]: each left-to-right pass sinks the largest
/// unplaced value to the back.
pub fn sinking_sort(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();

    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..sorted.len() {
            if sorted[i - 1] > sorted[i] {
                trace!(before = ?sorted, i, "sinking_sort swap");
                sorted.swap(i - 1, i);
                swapped = true;
            }
        }
    }
    sorted
}

/// For each position, find the minimum of the remainder and swap it in.
/// Always O(n²) comparisons.
pub fn selection_sort(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    let len = sorted.len();
    if len < 2 {
        return sorted;
    }

    for i in 0..len - 1 {
        let mut min_index = i;
        for j in i + 1..len {
            if sorted[j] < sorted[min_index] {
                min_index = j;
            }
        }
        if min_index != i {
            trace!(before = ?sorted, i, min_index, "selection_sort swap");
            sorted.swap(i, min_index);
        }
    }
    sorted
}

/// Shift each element left by adjacent swaps while its predecessor is greater.
pub fn insertion_sort(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();

    for i in 1..sorted.len() {
        let mut j = i;
        while j > 0 && sorted[j - 1] > sorted[j] {
            trace!(before = ?sorted, j, "insertion_sort swap");
            sorted.swap(j - 1, j);
            j -= 1;
        }
    }
    sorted
}

/// Top-down merge sort. The left half takes the first `n / 2` elements and
/// ties are taken from the left half, so the sort is stable.
pub fn merge_sort(values: &[i64]) -> Vec<i64> {
    if values.len() < 2 {
        return values.to_vec();
    }

    let (left, right) = values.split_at(values.len() / 2);
    let merged = merge(&merge_sort(left), &merge_sort(right));
    trace!(merged = ?merged, "merge_sort merged");
    merged
}

fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            Ordering::Greater => {
                merged.push(right[j]);
                j += 1;
            }
            Ordering::Less | Ordering::Equal => {
                merged.push(left[i]);
                i += 1;
            }
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

/// Quicksort with a Lomuto partition around the last element.
/// O(n log n) average, O(n²) on already-sorted input.
pub fn quick_sort(values: &[i64]) -> Vec<i64> {
    let mut sorted = values.to_vec();
    quick_sort_in_place(&mut sorted);
    sorted
}

/// Recurses into the smaller side only and loops on the larger one, so the
/// stack stays O(log n) even when every partition is lopsided.
fn quick_sort_in_place(mut data: &mut [i64]) {
    while data.len() >= 2 {
        let pivot_index = partition(data);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot_index);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort_in_place(left);
            data = right;
        } else {
            quick_sort_in_place(right);
            data = left;
        }
    }
}

/// Lomuto partition; returns the final position of the pivot.
fn partition(data: &mut [i64]) -> usize {
    let end = data.len() - 1;
    let pivot = data[end];
    let mut boundary = 0;

    for i in 0..end {
        if data[i] <= pivot {
            data.swap(i, boundary);
            boundary += 1;
        }
    }
    data.swap(boundary, end);
    trace!(pivot, boundary, partitioned = ?data, "quick_sort partition");
    boundary
}
