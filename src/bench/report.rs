// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Aggregated benchmark results.

use std::collections::BTreeMap;

use serde::Serialize;

use super::corpus::SubstringKind;
use super::timing::Timing;
use crate::matcher::Algorithm;

/// Timings for one (corpus, substring kind) pair.
pub type AlgorithmTimings = BTreeMap<Algorithm, Timing>;

/// One corpus's results: the patterns that were searched and their timings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorpusReport {
    pub patterns: BTreeMap<SubstringKind, String>,
    pub timings: BTreeMap<SubstringKind, AlgorithmTimings>,
}

/// Corpus name → substring kind → algorithm → best duration.
///
/// Corpora keep the order they were benchmarked in.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchReport {
    pub corpora: Vec<(String, CorpusReport)>,
}

impl BenchReport {
    /// Results for `corpus`, inserting an empty entry the first time.
    pub fn corpus_mut(&mut self, corpus: &str) -> &mut CorpusReport {
        let index = match self.corpora.iter().position(|(name, _)| name == corpus) {
            Some(index) => index,
            None => {
                self.corpora.push((corpus.to_string(), CorpusReport::default()));
                self.corpora.len() - 1
            }
        };
        &mut self.corpora[index].1
    }

    pub fn corpus(&self, corpus: &str) -> Option<&CorpusReport> {
        self.corpora
            .iter()
            .find(|(name, _)| name == corpus)
            .map(|(_, report)| report)
    }

    pub fn record(&mut self, corpus: &str, kind: SubstringKind, algorithm: Algorithm, timing: Timing) {
        self.corpus_mut(corpus)
            .timings
            .entry(kind)
            .or_default()
            .insert(algorithm, timing);
    }

    pub fn get(&self, corpus: &str, kind: SubstringKind, algorithm: Algorithm) -> Option<Timing> {
        self.corpus(corpus)?.timings.get(&kind)?.get(&algorithm).copied()
    }

    /// Number of recorded cells across all corpora.
    pub fn len(&self) -> usize {
        self.corpora
            .iter()
            .flat_map(|(_, report)| report.timings.values())
            .map(BTreeMap::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fastest algorithm for a (corpus, kind) pair.
    pub fn fastest(&self, corpus: &str, kind: SubstringKind) -> Option<(Algorithm, Timing)> {
        self.corpus(corpus)?
            .timings
            .get(&kind)?
            .iter()
            .min_by_key(|(_, timing)| **timing)
            .map(|(algorithm, timing)| (*algorithm, *timing))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let map: serde_json::Map<String, serde_json::Value> = self
            .corpora
            .iter()
            .map(|(name, report)| serde_json::to_value(report).map(|value| (name.clone(), value)))
            .collect::<serde_json::Result<_>>()?;
        serde_json::to_string_pretty(&map)
    }
}
