//! Preprocessing tables against their oracles.

use super::oracles::{oracle_lps, oracle_shift};
use needlework::{compute_lps, ShiftTable};
use proptest::prelude::*;

fn pattern_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'A', b'B', b'C']), 1..16)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// compute_lps matches the brute-force border search.
    #[test]
    fn diff_lps(pattern in pattern_strategy()) {
        prop_assert_eq!(compute_lps(&pattern), oracle_lps(&pattern));
    }

    /// Every byte's shift matches the position-derived definition,
    /// including the insert-if-absent rule for the final byte.
    #[test]
    fn diff_shift_table(pattern in pattern_strategy()) {
        let table = ShiftTable::build(&pattern);
        for byte in [b'A', b'B', b'C', b'D'] {
            prop_assert_eq!(table.get(byte), oracle_shift(&pattern, byte), "byte {}", byte as char);
        }
        prop_assert_eq!(table.shift(b'D'), pattern.len());
    }

    /// Shifts never stall and never overshoot.
    #[test]
    fn prop_shift_bounds(pattern in prop::collection::vec(any::<u8>(), 1..32)) {
        let table = ShiftTable::build(&pattern);
        for (_, shift) in table.iter() {
            prop_assert!((1..=pattern.len()).contains(&shift));
        }
        prop_assert!(table.len() <= pattern.len());
    }

    /// LPS values grow by at most one per step.
    #[test]
    fn prop_lps_step(pattern in pattern_strategy()) {
        let lps = compute_lps(&pattern);
        for i in 1..lps.len() {
            prop_assert!(lps[i] <= lps[i - 1] + 1);
        }
    }
}
