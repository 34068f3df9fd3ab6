// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wall-clock measurement with min-of-k selection.
//!
//! A measurement runs the same closure `k` times and keeps the fastest run;
//! slower runs are scheduler or cache noise, never the algorithm being faster.
//! The clock sits behind [`Stopwatch`] so tests can feed fixed durations.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::{Serialize, Serializer};

/// Times a single execution of a closure.
pub trait Stopwatch {
    fn time(&mut self, run: &mut dyn FnMut()) -> Duration;
}

/// [`Instant`]-based stopwatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallClock;

impl Stopwatch for WallClock {
    #[inline]
    fn time(&mut self, run: &mut dyn FnMut()) -> Duration {
        let start = Instant::now();
        run();
        start.elapsed()
    }
}

/// Fastest of `repeats` timed runs of `run`. Zero repeats times nothing.
pub fn min_of<S, F>(stopwatch: &mut S, repeats: usize, mut run: F) -> Duration
where
    S: Stopwatch + ?Sized,
    F: FnMut(),
{
    (0..repeats)
        .map(|_| stopwatch.time(&mut run))
        .min()
        .unwrap_or(Duration::ZERO)
}

/// Time `search(text, pattern)` the way the harness does.
pub fn measure<S>(
    stopwatch: &mut S,
    repeats: usize,
    search: fn(&[u8], &[u8]) -> Option<usize>,
    text: &[u8],
    pattern: &[u8],
) -> Timing
where
    S: Stopwatch + ?Sized,
{
    Timing(min_of(stopwatch, repeats, || {
        black_box(search(black_box(text), black_box(pattern)));
    }))
}

/// Best observed duration for one (corpus, pattern, algorithm) cell.
///
/// Serializes as fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Timing(pub Duration);

impl Timing {
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }
}

impl Serialize for Timing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_secs_f64())
    }
}
