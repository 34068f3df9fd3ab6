// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the needlework command-line interface.
//!
//! Running with no subcommand is the same as `bench` with every default: read
//! `text_1.txt` and `text_2.txt` from the working directory, time each matcher
//! three times per pattern, and print the line report. `search` runs the
//! matchers once on a file, and the two demo subcommands exercise the
//! standalone hash table and upper-bound search.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use needlework::bench::{BenchConfig, DEFAULT_CORPORA};
use needlework::Algorithm;

#[derive(Parser)]
#[command(
    name = "needlework",
    about = "Boyer-Moore, KMP and Rabin-Karp substring search benchmark",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Time every matcher on each corpus (the default command)
    Bench(BenchArgs),

    /// Find the first occurrence of a pattern in a file
    Search {
        /// File to search (read as UTF-8)
        file: PathBuf,

        /// Pattern to look for
        pattern: String,

        /// Matcher to run
        #[arg(short, long, value_enum, default_value = "all")]
        algorithm: AlgorithmChoice,
    },

    /// Chained hash table demo: insert, delete, look up
    HashTable {
        /// Number of buckets
        #[arg(short, long, default_value = "5")]
        buckets: usize,
    },

    /// Upper-bound binary search demo over a fixed sorted array
    Bisect {
        /// Targets to search for
        #[arg(default_values_t = [3.0, 4.7, 8.0, 0.1])]
        targets: Vec<f64>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    /// Corpus files, named "Text 1", "Text 2", ... in order
    #[arg(default_values_t = DEFAULT_CORPORA.map(String::from))]
    pub corpora: Vec<String>,

    /// Timed runs per (corpus, pattern, algorithm); the minimum is reported
    #[arg(short, long, default_value = "3")]
    pub repeat: usize,

    /// Characters in the randomly sliced existing pattern
    #[arg(short, long, default_value = "20")]
    pub pattern_len: usize,

    /// Seed for pattern selection (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the report as JSON instead of lines
    #[arg(long)]
    pub json: bool,
}

impl Default for BenchArgs {
    fn default() -> Self {
        let defaults = BenchConfig::default();
        Self {
            corpora: DEFAULT_CORPORA.map(String::from).to_vec(),
            repeat: defaults.repeats,
            pattern_len: defaults.pattern_len,
            seed: defaults.seed,
            json: false,
        }
    }
}

impl BenchArgs {
    pub fn config(&self) -> BenchConfig {
        BenchConfig {
            repeats: self.repeat,
            pattern_len: self.pattern_len,
            seed: self.seed,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    #[value(alias = "boyer-moore")]
    Bm,
    Kmp,
    #[value(alias = "rabin-karp")]
    Rk,
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Bm => vec![Algorithm::BoyerMoore],
            AlgorithmChoice::Kmp => vec![Algorithm::Kmp],
            AlgorithmChoice::Rk => vec![Algorithm::RabinKarp],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}
