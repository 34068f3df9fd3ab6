// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rabin–Karp: compare fingerprints, then verify.
//!
//! Each window of `m` bytes is reduced to a polynomial hash in radix 256 modulo
//! a small prime. The modulus is deliberately tiny (101), so equal hashes are
//! common and every hash hit is confirmed byte-by-byte before it counts.
//!
//! Sliding the window one byte costs O(1):
//!
//! ```text
//! t' = ((t - text[s] * h) * d + text[s + m]) mod q,   h = d^(m-1) mod q
//! ```
//!
//! The subtraction can go negative, and Rust's `%` keeps the dividend's sign,
//! so the result is pulled back into `[0, q)` by adding `q`.

use crate::contracts::check_hash_in_range;

/// Alphabet size: one digit per byte value.
pub const RADIX: i64 = 256;

/// Prime modulus for window hashes.
pub const MODULUS: i64 = 101;

/// Hash parameters for windows of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    window_len: usize,
    /// `RADIX^(window_len - 1) mod MODULUS`, the weight of the outgoing byte.
    high_order: i64,
}

impl RollingHash {
    pub fn new(window_len: usize) -> Self {
        let high_order =
            (0..window_len.saturating_sub(1)).fold(1 % MODULUS, |h, _| h * RADIX % MODULUS);
        Self {
            window_len,
            high_order,
        }
    }

    #[inline]
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    #[inline]
    pub fn high_order(&self) -> i64 {
        self.high_order
    }

    /// Hash of `window` computed from scratch (Horner's rule).
    pub fn hash_of(&self, window: &[u8]) -> i64 {
        window
            .iter()
            .fold(0, |acc, &byte| (RADIX * acc + i64::from(byte)) % MODULUS)
    }

    /// Slide a window hash one byte to the right.
    #[inline]
    pub fn roll(&self, hash: i64, outgoing: u8, incoming: u8) -> i64 {
        let mut next =
            ((hash - i64::from(outgoing) * self.high_order) * RADIX + i64::from(incoming)) % MODULUS;
        // INVARIANT: hash results are always in [0, MODULUS).
        if next < 0 {
            next += MODULUS;
        }
        check_hash_in_range(next, MODULUS);
        next
    }

    /// Hashes of every full window of `text`, left to right.
    pub fn windows<'a>(&self, text: &'a [u8]) -> WindowHashes<'a> {
        let hash = if self.window_len <= text.len() {
            self.hash_of(&text[..self.window_len])
        } else {
            0
        };
        WindowHashes {
            hasher: *self,
            text,
            next: 0,
            hash,
        }
    }
}

/// Iterator of `(start, hash)` pairs produced by rolling.
///
/// Yields nothing for an empty window or a window longer than the text.
#[derive(Debug, Clone)]
pub struct WindowHashes<'a> {
    hasher: RollingHash,
    text: &'a [u8],
    next: usize,
    hash: i64,
}

impl Iterator for WindowHashes<'_> {
    type Item = (usize, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.hasher.window_len;
        let s = self.next;
        if m == 0 || s + m > self.text.len() {
            return None;
        }

        let current = self.hash;
        // No roll after the last window.
        if s + m < self.text.len() {
            self.hash = self.hasher.roll(current, self.text[s], self.text[s + m]);
        }
        self.next += 1;
        Some((s, current))
    }
}

/// Position of the first occurrence of `pattern` in `text`.
///
/// Returns `None` for an empty pattern or one longer than the text.
pub fn rabin_karp_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let m = pattern.len();
    if m == 0 || m > text.len() {
        return None;
    }

    let hasher = RollingHash::new(m);
    let target = hasher.hash_of(pattern);

    hasher
        .windows(text)
        .find(|&(s, hash)| hash == target && &text[s..s + m] == pattern)
        .map(|(s, _)| s)
}
