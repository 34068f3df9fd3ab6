//! Exact substring search three ways, plus the harness that races them.
//!
//! This crate provides Boyer–Moore (bad-character shifts), Knuth–Morris–Pratt
//! (failure function) and Rabin–Karp (rolling hash) matchers behind one
//! [`Matcher`] interface, and a min-of-k wall-clock harness that times them on
//! real corpora.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐     ┌──────────────────┐
//! │ matcher/         │────▶│ bench/           │────▶│ main.rs + cli/   │
//! │ (boyer_moore,    │     │ (corpus, timing, │     │ (bench, search,  │
//! │  kmp, rabin_karp)│     │  report)         │     │  demos)          │
//! └──────────────────┘     └──────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────────────────────┐
//! │ contracts.rs                                 │
//! │ (shift table, LPS and rolling-hash checks)   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! `hash_table` and `bisect` are standalone helpers with no tie to the matchers.
//!
//! # Usage
//!
//! ```
//! use needlework::{Algorithm, Matcher};
//!
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(algorithm.find(b"ABABDABACDABABCABAB", b"ABABCABAB"), Some(10));
//!     assert_eq!(algorithm.find(b"hello world", b"xyz"), None);
//! }
//! ```

pub mod bench;
pub mod bisect;
pub mod contracts;
pub mod hash_table;
pub mod matcher;
pub mod testing;

// Re-exports for public API
pub use bench::{run_benchmark, BenchConfig, BenchError, BenchReport, Corpus, SubstringKind, Timing};
pub use bisect::{upper_bound_search, BoundSearch};
pub use hash_table::ChainedHashTable;
pub use matcher::{
    boyer_moore_search, compute_lps, find_with_all, kmp_search, rabin_karp_search, Algorithm,
    Matcher, RollingHash, ShiftTable,
};
