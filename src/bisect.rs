//! Binary search that reports how it got there.
//!
//! Instead of an index, the search returns the smallest element that is not
//! less than the target (its upper bound in the sorted slice) together with
//! the number of halving steps taken.

use serde::Serialize;

/// Outcome of [`upper_bound_search`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundSearch<T> {
    /// Loop iterations until the interval closed.
    pub iterations: usize,
    /// Smallest element `>= target`, or `None` if every element is smaller.
    pub upper_bound: Option<T>,
}

/// Search an ascending slice for the first element not less than `target`.
///
/// Works on `PartialOrd` so float slices can be searched directly. The
/// interval is half-open internally (`[left, right)`), which walks exactly
/// the same midpoints as the closed-interval formulation.
pub fn upper_bound_search<T: PartialOrd + Copy>(sorted: &[T], target: T) -> BoundSearch<T> {
    let mut left = 0;
    let mut right = sorted.len();
    let mut iterations = 0;
    let mut upper_bound = None;

    while left < right {
        iterations += 1;
        let mid = left + (right - 1 - left) / 2;
        let value = sorted[mid];

        if value < target {
            left = mid + 1;
        } else {
            upper_bound = Some(value);
            right = mid;
        }
    }

    BoundSearch {
        iterations,
        upper_bound,
    }
}
