//! Harness runs over corpus files written to a temp directory.

use super::common::{write_corpus, PROSE_1, PROSE_2};
use needlework::bench::{load_corpora, run_benchmark, BenchConfig, BenchError, SubstringKind};
use needlework::{Algorithm, Matcher};
use tempfile::TempDir;

fn seeded() -> BenchConfig {
    BenchConfig {
        seed: Some(2024),
        ..BenchConfig::default()
    }
}

#[test]
fn test_run_benchmark_e2e() {
    let dir = TempDir::new().unwrap();
    let paths = [
        write_corpus(dir.path(), "text_1.txt", PROSE_1),
        write_corpus(dir.path(), "text_2.txt", PROSE_2),
    ];

    let corpora = load_corpora(&paths).expect("corpora should load");
    assert_eq!(corpora[0].name, "Text 1");
    assert_eq!(corpora[1].name, "Text 2");

    let report = run_benchmark(&corpora, &seeded()).expect("benchmark should run");
    assert_eq!(report.len(), 12);

    for (corpus, (name, entry)) in corpora.iter().zip(&report.corpora) {
        assert_eq!(&corpus.name, name);

        let existing = &entry.patterns[&SubstringKind::Existing];
        let absent = &entry.patterns[&SubstringKind::Absent];
        assert_eq!(existing.chars().count(), 20);

        // The harness does not verify; check its inputs here instead.
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.find_str(&corpus.text, existing),
                corpus.text.find(existing.as_str()),
                "{} on {}",
                algorithm,
                name
            );
            assert_eq!(algorithm.find_str(&corpus.text, absent), None);
        }
    }
}

#[test]
fn test_absent_markers_numbered_per_corpus() {
    let dir = TempDir::new().unwrap();
    let paths = [
        write_corpus(dir.path(), "a.txt", PROSE_1),
        write_corpus(dir.path(), "b.txt", PROSE_2),
    ];
    let corpora = load_corpora(&paths).unwrap();
    let report = run_benchmark(&corpora, &seeded()).unwrap();

    assert_eq!(
        report.corpora[0].1.patterns[&SubstringKind::Absent],
        "NonExistingSubstring1"
    );
    assert_eq!(
        report.corpora[1].1.patterns[&SubstringKind::Absent],
        "NonExistingSubstring2"
    );
}

#[test]
fn test_missing_corpus_is_fatal() {
    let dir = TempDir::new().unwrap();
    let present = write_corpus(dir.path(), "text_1.txt", PROSE_1);
    let missing = dir.path().join("text_2.txt");

    let err = load_corpora(&[present, missing.clone()]).unwrap_err();
    match err {
        BenchError::Corpus { path, source } => {
            assert_eq!(path, missing);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Corpus error, got {:?}", other),
    }
}

#[test]
fn test_report_json_round_trips_through_serde_json() {
    let dir = TempDir::new().unwrap();
    let paths = [write_corpus(dir.path(), "one.txt", PROSE_2)];
    let corpora = load_corpora(&paths).unwrap();
    let report = run_benchmark(&corpora, &seeded()).unwrap();

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    for kind in ["existing", "absent"] {
        for algorithm in ["boyer_moore", "kmp", "rabin_karp"] {
            let seconds = json["Text 1"]["timings"][kind][algorithm]
                .as_f64()
                .unwrap_or_else(|| panic!("missing {} / {}", kind, algorithm));
            assert!(seconds >= 0.0);
        }
    }
    assert!(json["Text 1"]["patterns"]["existing"].is_string());
}

#[test]
fn test_non_utf8_corpus_is_invalid_data() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, b"caf\xe9 cr\xe8me br\xfbl\xe9e").unwrap();

    let err = load_corpora(&[path.clone()]).unwrap_err();
    match err {
        BenchError::Corpus { path: failed, source } => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected Corpus error, got {:?}", other),
    }
}
