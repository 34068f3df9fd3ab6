//! Differential testing: every matcher against the naive scan.
//!
//! Small alphabets make partial matches frequent, which is where the shift
//! and fallback logic earns its keep. Full-byte inputs catch anything that
//! assumes ASCII.

use super::common::all_occurrences;
use needlework::testing::naive_search;
use needlework::{Algorithm, Matcher};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Bytes from a tiny alphabet.
fn small_alphabet(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b']), 0..max)
}

/// Arbitrary bytes.
fn any_bytes(max: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..max)
}

// ============================================================================
// AGREEMENT
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// All three matchers agree with the naive scan on a binary alphabet.
    #[test]
    fn prop_agree_small_alphabet(text in small_alphabet(80), pattern in small_alphabet(8)) {
        let expected = naive_search(&text, &pattern);
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.find(&text, &pattern), expected, "{}", algorithm);
        }
    }

    /// Same on arbitrary bytes, where most patterns are absent.
    #[test]
    fn prop_agree_any_bytes(text in any_bytes(200), pattern in any_bytes(4)) {
        let expected = naive_search(&text, &pattern);
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.find(&text, &pattern), expected, "{}", algorithm);
        }
    }

    /// The reported position is the earliest occurrence.
    #[test]
    fn prop_first_occurrence(text in small_alphabet(60), pattern in small_alphabet(5)) {
        let first = all_occurrences(&text, &pattern).first().copied();
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.find(&text, &pattern), first, "{}", algorithm);
        }
    }

    /// Patterns longer than the text are never found.
    #[test]
    fn prop_longer_pattern_absent(text in any_bytes(20), extra in any_bytes(10)) {
        let mut pattern = text.clone();
        pattern.push(0);
        pattern.extend(extra);
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.find(&text, &pattern), None, "{}", algorithm);
        }
    }

    /// A pattern planted into text it cannot otherwise appear in is found exactly there.
    #[test]
    fn prop_planted_pattern(
        prefix in small_alphabet(50),
        suffix in small_alphabet(50),
        pattern in prop::collection::vec(b'x'..=b'z', 1..6),
    ) {
        let mut text = prefix.clone();
        text.extend_from_slice(&pattern);
        text.extend_from_slice(&suffix);
        for algorithm in Algorithm::ALL {
            prop_assert_eq!(algorithm.find(&text, &pattern), Some(prefix.len()), "{}", algorithm);
        }
    }

    /// Unicode text is searched byte-wise; a hit is always on a char boundary
    /// when the pattern starts with a complete character.
    #[test]
    fn prop_unicode_hits_on_boundary(
        text in "[a-cé日]{0,30}",
        pattern in "[a-cé日]{1,3}",
    ) {
        let expected = text.find(&pattern);
        for algorithm in Algorithm::ALL {
            let found = algorithm.find_str(&text, &pattern);
            prop_assert_eq!(found, expected, "{}", algorithm);
            if let Some(pos) = found {
                prop_assert!(text.is_char_boundary(pos));
            }
        }
    }
}
