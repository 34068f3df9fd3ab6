// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmark inputs: corpora and the patterns sampled from them.
//!
//! Each corpus contributes two patterns. The *existing* one is a random slice
//! of the corpus itself, cut on character boundaries so it stays printable.
//! The *absent* one is a fixed marker that is lengthened until the corpus
//! really does not contain it.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{BenchError, Result};

/// A named text loaded fully into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    pub name: String,
    pub text: String,
}

impl Corpus {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Read `path` as UTF-8. A missing or unreadable file is fatal.
    pub fn load(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BenchError::Corpus {
            path: PathBuf::from(path),
            source,
        })?;
        Ok(Self::new(name, text))
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Which of the two sampled patterns a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstringKind {
    Existing,
    Absent,
}

impl SubstringKind {
    pub const ALL: [SubstringKind; 2] = [SubstringKind::Existing, SubstringKind::Absent];

    pub fn label(self) -> &'static str {
        match self {
            SubstringKind::Existing => "Existing Substring",
            SubstringKind::Absent => "Non-existing Substring",
        }
    }
}

impl fmt::Display for SubstringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two patterns searched in one corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSample {
    pub existing: String,
    pub absent: String,
}

impl PatternSample {
    pub fn get(&self, kind: SubstringKind) -> &str {
        match kind {
            SubstringKind::Existing => &self.existing,
            SubstringKind::Absent => &self.absent,
        }
    }
}

/// Slice `len` characters out of `text` at a random character offset.
///
/// The start is drawn from `0..=chars - len - 1`, so the slice never touches
/// the final character.
pub fn sample_existing<R: Rng + ?Sized>(
    corpus: &Corpus,
    len: usize,
    rng: &mut R,
) -> Result<String> {
    let chars = corpus.char_len();
    let needed = len.saturating_add(1);
    if len == 0 || len == usize::MAX || chars < needed {
        return Err(BenchError::CorpusTooShort {
            name: corpus.name.clone(),
            chars,
            needed,
        });
    }

    let start = rng.gen_range(0..=chars - needed);
    Ok(corpus.text.chars().skip(start).take(len).collect())
}

/// Marker pattern that does not occur in `text`.
///
/// Starts as `NonExistingSubstring{ordinal}` and grows a `#` at a time while
/// the text still contains it.
pub fn absent_pattern(text: &str, ordinal: usize) -> String {
    let mut pattern = format!("NonExistingSubstring{}", ordinal);
    while text.contains(&pattern) {
        pattern.push('#');
    }
    pattern
}

/// Pick both patterns for one corpus.
pub fn sample_patterns<R: Rng + ?Sized>(
    corpus: &Corpus,
    ordinal: usize,
    len: usize,
    rng: &mut R,
) -> Result<PatternSample> {
    Ok(PatternSample {
        existing: sample_existing(corpus, len, rng)?,
        absent: absent_pattern(&corpus.text, ordinal),
    })
}
