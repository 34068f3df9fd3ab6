// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for cross-matcher agreement.
//!
//! Arbitrary text and pattern bytes go to all three matchers. None may panic,
//! and all must report the same first occurrence as a naive scan. Bounds
//! handling is the usual casualty: empty patterns, patterns longer than the
//! text, matches that end on the last byte.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use needlework::testing::naive_search;
use needlework::{Algorithm, Matcher};

#[derive(Debug, Arbitrary)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
    /// Fold bytes into a small alphabet to make partial matches likely
    fold: Option<u8>,
}

fuzz_target!(|input: Input| {
    let Input {
        mut text,
        mut pattern,
        fold,
    } = input;

    // Cap sizes to keep the naive oracle fast
    text.truncate(4096);
    pattern.truncate(64);

    if let Some(k) = fold {
        let k = k.max(1);
        text.iter_mut().for_each(|b| *b %= k);
        pattern.iter_mut().for_each(|b| *b %= k);
    }

    let expected = naive_search(&text, &pattern);

    for algorithm in Algorithm::ALL {
        // INVARIANT: every matcher agrees with the naive scan
        assert_eq!(
            algorithm.find(&text, &pattern),
            expected,
            "{} disagrees (text len {}, pattern len {})",
            algorithm,
            text.len(),
            pattern.len()
        );
    }

    // INVARIANT: a reported match really is a match
    if let Some(pos) = expected {
        assert_eq!(&text[pos..pos + pattern.len()], pattern.as_slice());
    }
});
