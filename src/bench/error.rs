// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a benchmark run could not start.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("failed to read corpus {}", path.display())]
    Corpus {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("corpus '{name}' has {chars} characters, need at least {needed} to sample a pattern")]
    CorpusTooShort {
        name: String,
        chars: usize,
        needed: usize,
    },

    #[error("invalid benchmark configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
