//! Test utilities shared across unit tests, integration tests, benches and fuzz targets.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

/// Obviously-correct first-occurrence search: try every start in order.
///
/// Follows the matchers' contract, so an empty pattern is never found.
pub fn naive_search(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return None;
    }
    text.windows(pattern.len()).position(|window| window == pattern)
}

/// Every start position of `pattern` in `text`, overlapping matches included.
pub fn all_occurrences(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(i, _)| i)
        .collect()
}

/// Hand-picked (text, pattern, expected) cases that exercise each matcher's edge paths.
pub const KNOWN_CASES: &[(&str, &str, Option<usize>)] = &[
    ("ABABDABACDABABCABAB", "ABABCABAB", Some(10)),
    ("hello world", "xyz", None),
    ("hello world", "world", Some(6)),
    ("hello", "hello", Some(0)),
    ("hello", "ello", Some(1)),
    ("hi", "hello", None),
    ("", "a", None),
    ("abc", "", None),
    ("aaaa", "aa", Some(0)),
    ("aaab", "aab", Some(1)),
    ("abcabcabd", "abcabd", Some(3)),
    ("AABAACAADAABAABA", "AABA", Some(0)),
    ("xxxxxxxxxxy", "xxy", Some(8)),
    ("the cat sat on the mat", "the mat", Some(15)),
    ("café crème", "crème", Some(6)),
];

/// Deterministic pseudo-text over a small alphabet, for benches and fuzz seeds.
pub fn generate_text(len: usize, alphabet: &[u8], seed: u64) -> Vec<u8> {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
