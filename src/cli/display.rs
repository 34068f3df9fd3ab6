// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the needlework CLI.
//!
//! The benchmark report is plain line-oriented text; color only decorates it.
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `NEEDLEWORK_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR`
//! and non-TTY stdout turn color off entirely, so piped output is byte-for-byte
//! the uncolored report.
//!
//! # Theme detection order
//!
//! 1. `NEEDLEWORK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::fmt::Write as _;
use std::sync::OnceLock;

use needlework::bench::{BenchReport, SubstringKind};
use needlework::{Algorithm, Matcher};

/// Characters of a pattern shown in the report header.
pub const PATTERN_PREVIEW: usize = 30;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("NEEDLEWORK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Same check for stderr, where status lines go
pub fn use_colors_stderr() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stderr)
}

/// Wrap `text` in a theme color and modifiers when `enabled`
pub fn paint(enabled: bool, color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if enabled {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// First `max` characters of `s`
pub fn preview(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// STATUS LINES (stderr)
// ═══════════════════════════════════════════════════════════════════════════

/// Progress note on stderr, dimmed when stderr is a terminal
pub fn status(message: &str) {
    eprintln!("{}", paint(use_colors_stderr(), GRAY, &[], message));
}

/// Non-fatal problem on stderr
pub fn warn(message: &str) {
    eprintln!("{} {}", paint(use_colors_stderr(), YELLOW, &[BOLD], "warning:"), message);
}

/// Fatal error on stderr, with the full cause chain
pub fn error(err: &anyhow::Error) {
    let mut message = err.to_string();
    for cause in err.chain().skip(1) {
        let _ = write!(message, ": {}", cause);
    }
    eprintln!("❌ {}", paint(use_colors_stderr(), RED, &[], &message));
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT
// ═══════════════════════════════════════════════════════════════════════════

/// Render the benchmark report, one line per algorithm.
///
/// ```text
///
/// Text 1:
///
/// Searching Existing Substring: "..."...
/// boyer_moore: 0.000012 seconds
/// ```
///
/// With `colors`, the fastest algorithm in each group is highlighted.
pub fn render_report(report: &BenchReport, colors: bool) -> String {
    let mut out = String::new();

    for (name, corpus) in &report.corpora {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", paint(colors, CYAN, &[BOLD], name));

        for kind in SubstringKind::ALL {
            let Some(timings) = corpus.timings.get(&kind) else {
                continue;
            };
            let pattern = corpus.patterns.get(&kind).map(String::as_str).unwrap_or("");
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "Searching {}: \"{}...\"",
                kind,
                preview(pattern, PATTERN_PREVIEW)
            );

            let fastest = report.fastest(name, kind).map(|(algorithm, _)| algorithm);
            for (algorithm, timing) in timings {
                let seconds = format!("{:.6}", timing.as_secs_f64());
                let seconds = if Some(*algorithm) == fastest {
                    paint(colors, GREEN, &[BOLD], &seconds)
                } else {
                    seconds
                };
                let _ = writeln!(out, "{}: {} seconds", algorithm.name(), seconds);
            }
        }
    }

    out
}

/// One line per algorithm for the `search` subcommand
pub fn render_matches(results: &[(Algorithm, Option<usize>)], colors: bool) -> String {
    let width = results
        .iter()
        .map(|(algorithm, _)| visible_len(algorithm.name()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (algorithm, position) in results {
        let value = match position {
            Some(pos) => paint(colors, GREEN, &[], &pos.to_string()),
            None => paint(colors, GRAY, &[], "not found"),
        };
        let _ = writeln!(out, "{:<width$}  {}", algorithm.name(), value, width = width);
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
