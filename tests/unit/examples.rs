//! Worked examples: every matcher on hand-checked inputs.

use super::common::{assert_all_agree, KNOWN_CASES};
use needlework::{boyer_moore_search, find_with_all, kmp_search, rabin_karp_search};

#[test]
fn test_textbook_example() {
    let text = b"ABABDABACDABABCABAB";
    let pattern = b"ABABCABAB";
    assert_eq!(boyer_moore_search(text, pattern), Some(10));
    assert_eq!(kmp_search(text, pattern), Some(10));
    assert_eq!(rabin_karp_search(text, pattern), Some(10));
}

#[test]
fn test_not_found() {
    let text = b"hello world";
    let pattern = b"xyz";
    assert_eq!(boyer_moore_search(text, pattern), None);
    assert_eq!(kmp_search(text, pattern), None);
    assert_eq!(rabin_karp_search(text, pattern), None);
}

#[test]
fn test_known_cases() {
    for &(text, pattern, expected) in KNOWN_CASES {
        assert_eq!(
            assert_all_agree(text.as_bytes(), pattern.as_bytes()),
            expected,
            "text={:?} pattern={:?}",
            text,
            pattern
        );
    }
}

#[test]
fn test_pattern_longer_than_text() {
    for (algorithm, position) in find_with_all(b"abc", b"abcdef") {
        assert_eq!(position, None, "{}", algorithm);
    }
    for (algorithm, position) in find_with_all(b"", b"x") {
        assert_eq!(position, None, "{}", algorithm);
    }
}

#[test]
fn test_empty_pattern_not_found() {
    for (algorithm, position) in find_with_all(b"anything", b"") {
        assert_eq!(position, None, "{}", algorithm);
    }
    for (algorithm, position) in find_with_all(b"", b"") {
        assert_eq!(position, None, "{}", algorithm);
    }
}

#[test]
fn test_first_of_many_occurrences() {
    let text = b"xx needle yy needle zz needle";
    assert_eq!(assert_all_agree(text, b"needle"), Some(3));
}

#[test]
fn test_match_at_very_end() {
    let text = b"abcdefghij";
    assert_eq!(assert_all_agree(text, b"hij"), Some(7));
    assert_eq!(assert_all_agree(text, b"j"), Some(9));
}

#[test]
fn test_rabin_karp_collision_heavy_input() {
    // Windows whose hashes collide with the pattern's but differ in content.
    let text: Vec<u8> = [101u8, 0, 202, 0, 101, 0].repeat(50);
    assert_eq!(assert_all_agree(&text, &[0, 0]), None);
    assert_eq!(assert_all_agree(&text, &[202, 0, 101]), Some(2));
}

#[test]
fn test_binary_bytes() {
    let text = [0u8, 1, 2, 3, 255, 254, 0, 1];
    assert_eq!(assert_all_agree(&text, &[255, 254]), Some(4));
    assert_eq!(assert_all_agree(&text, &[0, 1]), Some(0));
}
