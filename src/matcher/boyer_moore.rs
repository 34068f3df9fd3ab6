// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer–Moore with a single bad-character table (the Horspool simplification).
//!
//! The window is compared right-to-left, and on any mismatch the cursor jumps
//! by the shift of the text byte currently under the pattern's *last* position,
//! no matter where the mismatch happened. No good-suffix table.
//!
//! The shift table is an explicit map over the bytes that occur in the pattern.
//! Bytes that never occur are resolved at lookup time through a caller-supplied
//! default, which the matcher sets to the pattern length.

use crate::contracts::check_shift_table_valid;

/// Last-occurrence shift distances for one pattern.
///
/// Built left-to-right over every byte except the last, so a later occurrence
/// overwrites an earlier one. The final byte is inserted only if absent: when
/// it also occurs earlier in the pattern, the loop value stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftTable {
    entries: [Option<usize>; 256],
    pattern_len: usize,
}

impl ShiftTable {
    /// Build the table for `pattern`. An empty pattern produces an empty table.
    pub fn build(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut entries = [None; 256];

        if let Some((&last, body)) = pattern.split_last() {
            for (i, &byte) in body.iter().enumerate() {
                entries[byte as usize] = Some(m - i - 1);
            }
            // Insert-if-absent: an earlier occurrence of the last byte wins.
            if entries[last as usize].is_none() {
                entries[last as usize] = Some(m);
            }
        }

        let table = Self {
            entries,
            pattern_len: m,
        };
        check_shift_table_valid(&table);
        table
    }

    /// Length of the pattern this table was built for.
    #[inline]
    pub fn pattern_len(&self) -> usize {
        self.pattern_len
    }

    /// Stored shift for `byte`, or `None` if the byte is not in the pattern.
    #[inline]
    pub fn get(&self, byte: u8) -> Option<usize> {
        self.entries[byte as usize]
    }

    /// Stored shift for `byte`, falling back to `default` when absent.
    #[inline]
    pub fn shift_or(&self, byte: u8, default: usize) -> usize {
        self.get(byte).unwrap_or(default)
    }

    /// Shift used by the matcher: absent bytes skip the whole pattern.
    #[inline]
    pub fn shift(&self, byte: u8) -> usize {
        self.shift_or(byte, self.pattern_len)
    }

    /// Iterate the explicit entries in byte order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(byte, shift)| shift.map(|s| (byte as u8, s)))
    }

    /// Number of distinct bytes with an explicit entry.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_len == 0
    }
}

/// Position of the first occurrence of `pattern` in `text`.
///
/// Returns `None` for an empty pattern or one longer than the text.
pub fn boyer_moore_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return None;
    }

    let table = ShiftTable::build(pattern);
    let mut i = 0;

    while i <= n - m {
        let window = &text[i..i + m];
        // Right-to-left; `all` short-circuits at the first mismatch.
        if window.iter().rev().zip(pattern.iter().rev()).all(|(t, p)| t == p) {
            return Some(i);
        }
        // INVARIANT: every shift is at least 1, so the loop terminates.
        i += table.shift(text[i + m - 1]);
    }

    None
}
