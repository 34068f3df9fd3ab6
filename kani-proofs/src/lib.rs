// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the needlework matcher kernels.
//!
//! This standalone crate extracts the index and modular arithmetic of the
//! matchers and proves it correct for all inputs using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Roll range**: the rolling hash update always lands in `[0, q)`
//! 2. **Roll soundness**: rolling equals rehashing the shifted window
//! 3. **Shift bounds**: every Boyer–Moore shift is in `1..=m`
//! 4. **LPS bounds**: the failure function never indexes out of the pattern

pub const RADIX: i64 = 256;
pub const MODULUS: i64 = 101;

/// Longest pattern the bounded proofs enumerate
pub const MAX_PATTERN: usize = 6;

// ============================================================================
// ROLLING HASH (copied from src/matcher/rabin_karp.rs)
// ============================================================================

pub fn high_order(window_len: usize) -> i64 {
    let mut h = 1 % MODULUS;
    let mut i = 1;
    while i < window_len {
        h = h * RADIX % MODULUS;
        i += 1;
    }
    h
}

pub fn hash_of(window: &[u8]) -> i64 {
    let mut acc = 0;
    for &byte in window {
        acc = (RADIX * acc + i64::from(byte)) % MODULUS;
    }
    acc
}

pub fn roll(hash: i64, high_order: i64, outgoing: u8, incoming: u8) -> i64 {
    let mut next =
        ((hash - i64::from(outgoing) * high_order) * RADIX + i64::from(incoming)) % MODULUS;
    if next < 0 {
        next += MODULUS;
    }
    next
}

// ============================================================================
// SHIFT TABLE (copied from src/matcher/boyer_moore.rs)
// ============================================================================

pub fn build_shifts(pattern: &[u8]) -> [Option<usize>; 256] {
    let m = pattern.len();
    let mut entries = [None; 256];
    if let Some((&last, body)) = pattern.split_last() {
        for (i, &byte) in body.iter().enumerate() {
            entries[byte as usize] = Some(m - i - 1);
        }
        if entries[last as usize].is_none() {
            entries[last as usize] = Some(m);
        }
    }
    entries
}

// ============================================================================
// LPS (copied from src/matcher/kmp.rs)
// ============================================================================

pub fn compute_lps(pattern: &[u8], lps: &mut [usize]) {
    let m = pattern.len();
    let mut length = 0;
    let mut i = 1;
    while i < m {
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
            i += 1;
        } else if length != 0 {
            length = lps[length - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Verify roll never overflows and always normalizes into [0, q).
    #[kani::proof]
    fn verify_roll_in_range() {
        let hash: i64 = kani::any_where(|&h| (0..MODULUS).contains(&h));
        let h: i64 = kani::any_where(|&h| (0..MODULUS).contains(&h));
        let outgoing: u8 = kani::any();
        let incoming: u8 = kani::any();

        let next = roll(hash, h, outgoing, incoming);
        kani::assert((0..MODULUS).contains(&next), "roll must land in [0, q)");
    }

    /// Verify rolling a 3-byte window equals hashing the shifted window.
    #[kani::proof]
    #[kani::unwind(5)]
    fn verify_roll_matches_rehash() {
        let text: [u8; 4] = kani::any();
        let h = high_order(3);

        let first = hash_of(&text[..3]);
        let rolled = roll(first, h, text[0], text[3]);
        kani::assert(rolled == hash_of(&text[1..]), "roll must equal rehash");
    }

    /// Verify every stored shift is in 1..=m.
    #[kani::proof]
    #[kani::unwind(7)] // MAX_PATTERN + 1
    fn verify_shift_bounds() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX_PATTERN);
        let bytes: [u8; MAX_PATTERN] = kani::any();
        let pattern = &bytes[..len];

        let entries = build_shifts(pattern);
        let probe: u8 = kani::any();
        if let Some(shift) = entries[probe as usize] {
            kani::assert(shift >= 1 && shift <= len, "shift must be in 1..=m");
        }
        kani::assert(
            entries[pattern[len - 1] as usize].is_some(),
            "final byte must always have an entry",
        );
    }

    /// Verify the LPS loop stays in bounds and produces proper borders.
    #[kani::proof]
    #[kani::unwind(14)] // at most 2m iterations
    fn verify_lps_bounds() {
        let len: usize = kani::any_where(|&n| n <= MAX_PATTERN);
        let bytes: [u8; MAX_PATTERN] = kani::any();
        let pattern = &bytes[..len];
        let mut lps = [0usize; MAX_PATTERN];

        compute_lps(pattern, &mut lps[..len]);

        let i: usize = kani::any_where(|&i| i < len);
        kani::assert(lps[i] <= i, "lps[i] must be a proper prefix length");
    }
}
