// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Three exact substring matchers behind one interface.
//!
//! Every matcher answers the same question: where does `pattern` first occur
//! in `text`? Positions are byte offsets. An empty pattern, or a pattern
//! longer than the text, is never found.
//!
//! | Algorithm     | Preprocessing          | Scan direction | Worst case |
//! |---------------|------------------------|----------------|------------|
//! | Boyer–Moore   | shift table (256 slots)| right-to-left  | O(n·m)     |
//! | KMP           | LPS table (m slots)    | left-to-right  | O(n + m)   |
//! | Rabin–Karp    | pattern hash           | left-to-right  | O(n·m)     |

pub mod boyer_moore;
pub mod kmp;
pub mod rabin_karp;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use boyer_moore::{boyer_moore_search, ShiftTable};
pub use kmp::{compute_lps, kmp_search};
pub use rabin_karp::{rabin_karp_search, RollingHash, WindowHashes, MODULUS, RADIX};

/// A first-occurrence substring search.
pub trait Matcher {
    /// Short identifier used in reports.
    fn name(&self) -> &'static str;

    /// Byte offset of the first occurrence of `pattern` in `text`.
    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize>;

    /// [`Matcher::find`] over the UTF-8 bytes of two strings.
    fn find_str(&self, text: &str, pattern: &str) -> Option<usize> {
        self.find(text.as_bytes(), pattern.as_bytes())
    }
}

/// The matchers this crate ships, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    BoyerMoore,
    Kmp,
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::BoyerMoore, Algorithm::Kmp, Algorithm::RabinKarp];

    /// The plain function behind this variant.
    pub fn search_fn(self) -> fn(&[u8], &[u8]) -> Option<usize> {
        match self {
            Algorithm::BoyerMoore => boyer_moore_search,
            Algorithm::Kmp => kmp_search,
            Algorithm::RabinKarp => rabin_karp_search,
        }
    }
}

impl Matcher for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::BoyerMoore => "boyer_moore",
            Algorithm::Kmp => "kmp",
            Algorithm::RabinKarp => "rabin_karp",
        }
    }

    #[inline]
    fn find(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        (self.search_fn())(text, pattern)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "bm" | "boyer_moore" => Ok(Algorithm::BoyerMoore),
            "kmp" | "knuth_morris_pratt" => Ok(Algorithm::Kmp),
            "rk" | "rabin_karp" => Ok(Algorithm::RabinKarp),
            other => Err(format!(
                "unknown algorithm '{}' (expected bm, kmp or rk)",
                other
            )),
        }
    }
}

/// Run every matcher and return the results in [`Algorithm::ALL`] order.
pub fn find_with_all(text: &[u8], pattern: &[u8]) -> [(Algorithm, Option<usize>); 3] {
    Algorithm::ALL.map(|algorithm| (algorithm, algorithm.find(text, pattern)))
}
