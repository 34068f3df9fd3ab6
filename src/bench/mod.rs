// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Timing harness: every matcher against every corpus and pattern.
//!
//! A run is three sequential phases:
//!
//! 1. **Load**: read each corpus fully into memory (fatal on failure)
//! 2. **Sample**: pick an existing and an absent pattern per corpus
//! 3. **Time**: each (corpus, pattern, algorithm) cell runs `repeats` times,
//!    keeping the fastest
//!
//! The harness measures, it does not verify. Agreement between matchers is the
//! test suite's job.

mod corpus;
mod error;
mod report;
mod timing;

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::matcher::Algorithm;

pub use corpus::{absent_pattern, sample_existing, sample_patterns, Corpus, PatternSample, SubstringKind};
pub use error::{BenchError, Result};
pub use report::{AlgorithmTimings, BenchReport, CorpusReport};
pub use timing::{measure, min_of, Stopwatch, Timing, WallClock};

/// Default corpus files, read from the working directory.
pub const DEFAULT_CORPORA: [&str; 2] = ["text_1.txt", "text_2.txt"];

/// Knobs for a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Timed runs per cell; the minimum is kept.
    pub repeats: usize,
    /// Characters in the sampled existing pattern.
    pub pattern_len: usize,
    /// Seed for pattern sampling. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeats: 3,
            pattern_len: 20,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repeats == 0 {
            return Err(BenchError::InvalidConfig("repeats must be at least 1".into()));
        }
        if self.pattern_len == 0 {
            return Err(BenchError::InvalidConfig(
                "pattern length must be at least 1".into(),
            ));
        }
        if self.pattern_len == usize::MAX {
            return Err(BenchError::InvalidConfig(format!(
                "pattern length {} is too large",
                self.pattern_len
            )));
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Load corpora in order, naming them `Text 1`, `Text 2`, ...
pub fn load_corpora<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Corpus>> {
    paths
        .iter()
        .enumerate()
        .map(|(i, path)| Corpus::load(format!("Text {}", i + 1), path))
        .collect()
}

/// Benchmark `corpora` with the wall clock and the configured seed.
pub fn run_benchmark(corpora: &[Corpus], config: &BenchConfig) -> Result<BenchReport> {
    let mut rng = config.rng();
    run_benchmark_with(corpora, config, &mut rng, &mut WallClock)
}

/// [`run_benchmark`] with an explicit RNG and clock.
pub fn run_benchmark_with<R, S>(
    corpora: &[Corpus],
    config: &BenchConfig,
    rng: &mut R,
    stopwatch: &mut S,
) -> Result<BenchReport>
where
    R: Rng + ?Sized,
    S: Stopwatch + ?Sized,
{
    config.validate()?;
    for (i, corpus) in corpora.iter().enumerate() {
        if corpora[..i].iter().any(|earlier| earlier.name == corpus.name) {
            return Err(BenchError::InvalidConfig(format!(
                "duplicate corpus name '{}'",
                corpus.name
            )));
        }
    }

    // All sampling happens before the first measurement.
    let samples = corpora
        .iter()
        .enumerate()
        .map(|(i, corpus)| sample_patterns(corpus, i + 1, config.pattern_len, rng))
        .collect::<Result<Vec<_>>>()?;

    let mut report = BenchReport::default();
    for (corpus, sample) in corpora.iter().zip(&samples) {
        let entry = report.corpus_mut(&corpus.name);
        for kind in SubstringKind::ALL {
            entry.patterns.insert(kind, sample.get(kind).to_string());
        }

        for kind in SubstringKind::ALL {
            let pattern = sample.get(kind).as_bytes();
            for algorithm in Algorithm::ALL {
                let timing = measure(
                    stopwatch,
                    config.repeats,
                    algorithm.search_fn(),
                    corpus.text.as_bytes(),
                    pattern,
                );
                report.record(&corpus.name, kind, algorithm, timing);
            }
        }
    }

    Ok(report)
}
