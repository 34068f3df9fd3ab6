//! Custom cargo commands for needlework.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run criterion benchmarks
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask fuzz      - Fuzz one target for a fixed time
//!   cargo xtask corpus    - Generate text_1.txt and text_2.txt

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Words the synthetic corpora are drawn from.
const WORDS: &[&str] = &[
    "the", "of", "and", "to", "in", "is", "was", "that", "for", "with", "river", "stone",
    "window", "quiet", "harbor", "lantern", "measure", "pattern", "needle", "thread", "morning",
    "distance", "letter", "garden", "signal", "winter", "engine", "market", "shadow", "question",
    "circle", "silver", "promise", "island", "answer", "moment",
];

/// Fuzz targets under fuzz/fuzz_targets
const FUZZ_TARGETS: &[&str] = &["matcher_agreement", "preprocessing_tables", "rolling_hash"];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("kani") => kani()?,
        Some("fuzz") => fuzz(args.get(1).map(String::as_str))?,
        Some("corpus") => corpus(args.get(1).map(String::as_str))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify          Run full verification suite (markers + tests + clippy + kani)
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run criterion benchmarks
  kani            Run Kani proofs (skipped if cargo-kani is missing)
  fuzz [TARGET]   Fuzz a target for 60 seconds (default: matcher_agreement)
  corpus [SIZE]   Write text_1.txt and text_2.txt of roughly SIZE bytes
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("needlework Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Running Kani proofs...");
    kani()?;
    println!("✓ Kani proofs done\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

fn test() -> Result<()> {
    run_cargo(&["test"])
}

fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "matchers"])
}

fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");
    let available = Command::new("cargo")
        .args(["kani", "--version"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);
    if !available {
        println!("  (cargo-kani not installed, skipping)");
        return Ok(());
    }

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }
    Ok(())
}

fn fuzz(target: Option<&str>) -> Result<()> {
    let target = target.unwrap_or("matcher_agreement");
    if !FUZZ_TARGETS.contains(&target) {
        bail!("Unknown fuzz target {:?}, expected one of {:?}", target, FUZZ_TARGETS);
    }

    let status = Command::new("cargo")
        .args(["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"])
        .current_dir(project_root()?)
        .status()
        .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;

    if !status.success() {
        bail!("Fuzz target {} failed", target);
    }
    Ok(())
}

/// Write two seeded prose-like corpora into the project root.
fn corpus(size: Option<&str>) -> Result<()> {
    let size: usize = match size {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid corpus size {:?}", raw))?,
        None => 200_000,
    };
    if size < 64 {
        bail!("Corpus size must be at least 64 bytes, got {}", size);
    }

    let root = project_root()?;
    for (index, seed) in [(1, 0x5eed_0001_u64), (2, 0x5eed_0002)] {
        let text = generate_prose(size, seed);
        let path = root.join(format!("text_{}.txt", index));
        std::fs::write(&path, &text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("✓ {} ({} bytes)", path.display(), text.len());
    }
    Ok(())
}

fn generate_prose(size: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut text = String::with_capacity(size + 16);
    let mut sentence_len = 0;

    while text.len() < size {
        let Some(word) = WORDS.choose(&mut rng) else {
            break;
        };
        if sentence_len == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                text.extend(first.to_uppercase());
                text.push_str(chars.as_str());
            }
        } else {
            text.push_str(word);
        }
        sentence_len += 1;

        if sentence_len > 4 && rng.gen_bool(0.15) {
            text.push_str(if rng.gen_bool(0.2) { ".\n" } else { ". " });
            sentence_len = 0;
        } else {
            text.push(' ');
        }
    }
    text
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs", "src/contracts.rs", "src/matcher"])
        .current_dir(&root)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}
