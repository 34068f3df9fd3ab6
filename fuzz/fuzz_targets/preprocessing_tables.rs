// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the shift table and the LPS table.
//!
//! Both tables have a closed-form definition; this target checks the fast
//! constructions against it for arbitrary patterns.

#![no_main]

use libfuzzer_sys::fuzz_target;
use needlework::{compute_lps, ShiftTable};

fuzz_target!(|pattern: &[u8]| {
    let pattern = &pattern[..pattern.len().min(256)];
    let m = pattern.len();

    let lps = compute_lps(pattern);
    assert_eq!(lps.len(), m);
    for (i, &len) in lps.iter().enumerate() {
        // INVARIANT: proper border
        assert!(len <= i);
        assert_eq!(&pattern[..len], &pattern[i + 1 - len..=i]);
        // INVARIANT: longest border
        for longer in len + 1..=i {
            assert_ne!(&pattern[..longer], &pattern[i + 1 - longer..=i]);
        }
    }

    let table = ShiftTable::build(pattern);
    for byte in 0..=255u8 {
        let body = &pattern[..m.saturating_sub(1)];
        let expected = match body.iter().rposition(|&b| b == byte) {
            Some(i) => Some(m - 1 - i),
            None if pattern.last() == Some(&byte) => Some(m),
            None => None,
        };
        // INVARIANT: last occurrence before the final byte, else m for the final byte
        assert_eq!(table.get(byte), expected, "byte {:#04x}", byte);
    }
});
