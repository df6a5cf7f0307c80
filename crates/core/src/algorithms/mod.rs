//! Classic array algorithms used by the analyzers.
//!
//! Both are deliberately the textbook versions: an O(n²) selection sort and a
//! recursive binary search over an inclusive index range.

/// Index of the leftmost minimum in the inclusive range `[from, to]`.
///
/// Panics if the range is out of bounds, like slice indexing.
pub fn min_position(values: &[i32], from: usize, to: usize) -> usize {
    let mut min_pos = from;
    for i in from + 1..=to {
        if values[i] < values[min_pos] {
            min_pos = i;
        }
    }
    min_pos
}

/// Sort ascending in place.
///
/// For each position, the leftmost minimum of the unsorted suffix is swapped in.
pub fn selection_sort(values: &mut [i32]) {
    let n = values.len();
    if n < 2 {
        return;
    }
    for next in 0..n - 1 {
        let min_pos = min_position(values, next, n - 1);
        values.swap(next, min_pos);
    }
}

/// Whether `key` occurs in `sorted`, which must be ascending.
pub fn binary_search(sorted: &[i32], key: i32) -> bool {
    match sorted.len() {
        0 => false,
        n => search_range(sorted, key, 0, n - 1),
    }
}

// Inclusive [start, end]; indices stay unsigned, so the empty range is
// detected before `mid - 1` could underflow.
fn search_range(values: &[i32], key: i32, start: usize, end: usize) -> bool {
    if start > end {
        return false;
    }
    let mid = start + (end - start) / 2;
    let probe = values[mid];
    if key == probe {
        true
    } else if key < probe {
        if mid == 0 {
            return false;
        }
        search_range(values, key, start, mid - 1)
    } else {
        search_range(values, key, mid + 1, end)
    }
}
