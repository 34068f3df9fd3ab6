// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth–Morris–Pratt: linear-time search that never moves the text cursor back.
//!
//! The LPS ("longest proper prefix that is also a suffix") table tells the
//! matcher how much of the pattern is still matched after a mismatch, so only
//! the pattern cursor falls back.

use crate::contracts::check_lps_valid;

/// Failure function for `pattern`.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]` that
/// is also a suffix of it. `lps[0]` is always 0. Empty pattern, empty table.
pub fn compute_lps(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];
    let mut length = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            i += 1;
        } else if length != 0 {
            // Fall back without consuming pattern[i].
            // INVARIANT: lps[length - 1] < length, so the fallback chain ends.
            length = lps[length - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    check_lps_valid(pattern, &lps);
    lps
}

/// Position of the first occurrence of `pattern` in `text`.
///
/// Returns `None` for an empty pattern or one longer than the text.
pub fn kmp_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return None;
    }

    let lps = compute_lps(pattern);
    let (mut i, mut j) = (0, 0);

    while i < n {
        if pattern[j] == text[i] {
            i += 1;
            j += 1;
        } else if j != 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }

        if j == m {
            return Some(i - j);
        }
    }

    None
}
