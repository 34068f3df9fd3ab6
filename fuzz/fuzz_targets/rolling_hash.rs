// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the Rabin–Karp rolling hash.
//!
//! Every rolled window hash must equal the hash computed from scratch, and
//! must sit in `[0, q)`. A sign slip in the roll shows up here long before it
//! shows up as a missed match.

#![no_main]

use libfuzzer_sys::fuzz_target;
use needlework::matcher::MODULUS;
use needlework::RollingHash;

fuzz_target!(|data: (u8, Vec<u8>)| {
    let (m, mut text) = data;
    text.truncate(2048);
    let m = usize::from(m.max(1));

    let hasher = RollingHash::new(m);
    for (s, hash) in hasher.windows(&text) {
        // INVARIANT: normalized
        assert!((0..MODULUS).contains(&hash));
        // INVARIANT: incremental == direct
        assert_eq!(hash, hasher.hash_of(&text[s..s + m]));
    }
});
