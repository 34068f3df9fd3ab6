//! Runtime contracts for the matcher preprocessing tables.
//!
//! Debug-mode assertions that check the structural properties every matcher
//! relies on. They:
//!
//! 1. Are **zero-cost in release builds** (everything sits behind `debug_assert!`
//!    or `cfg!(debug_assertions)`)
//! 2. Catch a broken table at construction instead of as a wrong match later
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_shift_table_valid`  | every stored shift is in `1..=m`                |
//! | `check_lps_valid`          | `lps[0] = 0`, `lps[i] <= i`, prefix = suffix    |
//! | `check_hash_in_range`      | rolling hash stays in `[0, q)`                  |
//!
//! # Usage
//!
//! ```ignore
//! use needlework::contracts::*;
//!
//! // In debug builds, this panics if the table is malformed
//! check_lps_valid(pattern, &lps);
//!
//! // In release builds, this is a no-op
//! ```

use crate::matcher::ShiftTable;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    use crate::matcher::{MODULUS, RADIX};

    // INVARIANT: the roll's widest intermediate value fits in i64.
    // |(t - 255 * h) * d + 255| with t, h < q
    assert!((255 * MODULUS + MODULUS) * RADIX + 255 < i64::MAX);
    // INVARIANT: one digit per byte value
    assert!(RADIX == 256);
};

// ============================================================================
// SHIFT TABLE CONTRACTS
// ============================================================================

/// Check that every explicit shift lies in `1..=pattern_len`.
///
/// A zero shift would stall the Boyer–Moore cursor forever; a shift above `m`
/// could skip a match.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_shift_table_valid(table: &ShiftTable) {
    if !cfg!(debug_assertions) {
        return;
    }
    let m = table.pattern_len();
    for (byte, shift) in table.iter() {
        debug_assert!(
            (1..=m).contains(&shift),
            "Contract violation: shift[{:#04x}] = {} outside 1..={}",
            byte,
            shift,
            m
        );
    }
}

// ============================================================================
// LPS CONTRACTS
// ============================================================================

/// Check the failure function of `pattern`.
///
/// - `lps.len() == pattern.len()`
/// - `lps[0] == 0`
/// - `lps[i] <= i` (the prefix is proper)
/// - `pattern[..lps[i]] == pattern[i + 1 - lps[i]..=i]`
///
/// # Panics (debug builds only)
#[inline]
pub fn check_lps_valid(pattern: &[u8], lps: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        lps.len(),
        pattern.len(),
        "Contract violation: LPS length differs from pattern length"
    );
    if let Some(&first) = lps.first() {
        debug_assert_eq!(first, 0, "Contract violation: lps[0] must be 0");
    }
    for (i, &len) in lps.iter().enumerate() {
        debug_assert!(
            len <= i,
            "Contract violation: lps[{}] = {} is not a proper prefix",
            i,
            len
        );
        if len <= i {
            debug_assert!(
                pattern[..len] == pattern[i + 1 - len..=i],
                "Contract violation: lps[{}] = {} is not a border",
                i,
                len
            );
        }
    }
}

// ============================================================================
// ROLLING HASH CONTRACTS
// ============================================================================

/// Check that a window hash was normalized into `[0, modulus)`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_hash_in_range(hash: i64, modulus: i64) {
    debug_assert!(
        (0..modulus).contains(&hash),
        "Contract violation: window hash {} outside [0, {})",
        hash,
        modulus
    );
}
