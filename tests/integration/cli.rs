//! The `needlework` binary, run as a subprocess.

use super::common::{write_corpus, PROSE_1, PROSE_2};
use std::process::Command;
use tempfile::TempDir;

fn needlework() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_needlework"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_default_run_reads_fixed_paths() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path(), "text_1.txt", PROSE_1);
    write_corpus(dir.path(), "text_2.txt", PROSE_2);

    let output = needlework().current_dir(dir.path()).output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\nText 1:\n"));
    assert!(stdout.contains("\nText 2:\n"));
    assert!(stdout.contains("Searching Existing Substring: \""));
    assert!(stdout.contains("Searching Non-existing Substring: \"NonExistingSubstring1...\""));

    let timing_lines: Vec<&str> = stdout.lines().filter(|l| l.ends_with(" seconds")).collect();
    assert_eq!(timing_lines.len(), 12);
    for line in timing_lines {
        let (name, rest) = line.split_once(": ").unwrap();
        assert!(["boyer_moore", "kmp", "rabin_karp"].contains(&name), "{}", line);
        let value = rest.trim_end_matches(" seconds");
        let decimals = value.split_once('.').map(|(_, d)| d.len());
        assert_eq!(decimals, Some(6), "{}", line);
    }
}

#[test]
fn test_missing_corpus_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path(), "text_1.txt", PROSE_1);

    let output = needlework().current_dir(dir.path()).output().unwrap();
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("text_2.txt"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_bench_json_output() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(dir.path(), "corpus.txt", PROSE_1);

    let output = needlework()
        .args(["bench", "--json", "--seed", "5", "--repeat", "1"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["Text 1"]["timings"]["existing"]["kmp"].is_number());
}

#[test]
fn test_search_subcommand() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(dir.path(), "t.txt", "ABABDABACDABABCABAB");

    let output = needlework()
        .arg("search")
        .arg(&path)
        .arg("ABABCABAB")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|l| l.ends_with(" 10")), "{}", stdout);
}

#[test]
fn test_demo_subcommands() {
    let output = needlework().arg("hash-table").output().unwrap();
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "apple: 10\norange: 20\nbanana: None\n"
    );

    let output = needlework().args(["bisect", "8.0"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Number of iterations: 4"));
    assert!(stdout.contains("Upper bound: None"));
}

#[test]
fn test_oversized_pattern_len_is_a_clean_error() {
    let dir = TempDir::new().unwrap();
    let path = write_corpus(dir.path(), "corpus.txt", PROSE_1);

    let output = needlework()
        .args(["bench", "--pattern-len", &usize::MAX.to_string()])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("❌"), "stderr: {}", stderr);
    assert!(stderr.contains("too large"), "stderr: {}", stderr);
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}
