//! Tests for sort policies and comparators.

use std::cmp::Ordering;
use std::ffi::OsStr;

use crate::sorting::{SortPolicy, compare_lexical, compare_natural};

fn sorted(policy: SortPolicy, names: &[&str]) -> Vec<String> {
    let mut names: Vec<&str> = names.to_vec();
    names.sort_by(|a, b| policy.compare(OsStr::new(a), OsStr::new(b)));
    names.into_iter().map(String::from).collect()
}

#[test]
fn test_natural_puts_small_numbers_first() {
    assert_eq!(
        sorted(SortPolicy::Numeric, &["file10", "file2", "file1"]),
        vec!["file1", "file2", "file10"]
    );
}

#[test]
fn test_alpha_compares_digits_as_text() {
    assert_eq!(
        sorted(SortPolicy::Alpha, &["file10", "file2", "file1"]),
        vec!["file1", "file10", "file2"]
    );
}

#[test]
fn test_alpha_puts_uppercase_before_lowercase() {
    assert_eq!(sorted(SortPolicy::Alpha, &["b", "a", "B", "A"]), vec!["A", "B", "a", "b"]);
}

#[test]
fn test_case_alpha_interleaves_cases() {
    let result = sorted(SortPolicy::CaseAlpha, &["banana", "Apple", "cherry", "apricot"]);
    assert_eq!(result, vec!["Apple", "apricot", "banana", "cherry"]);
}

#[test]
fn test_case_insensitive_policies_treat_case_variants_as_equal() {
    for policy in [SortPolicy::CaseAlpha, SortPolicy::CaseNumeric] {
        let a = OsStr::new("A.txt");
        let b = OsStr::new("a.txt");
        assert_eq!(policy.compare(a, b), Ordering::Equal, "{:?}", policy);
        assert_eq!(policy.compare(b, a), Ordering::Equal, "{:?}", policy);
    }
}

#[test]
fn test_case_sensitive_policies_separate_case_variants() {
    for policy in [SortPolicy::Alpha, SortPolicy::Numeric] {
        assert_eq!(
            policy.compare(OsStr::new("A.txt"), OsStr::new("a.txt")),
            Ordering::Less,
            "{:?}",
            policy
        );
    }
}

#[test]
fn test_natural_shorter_prefix_sorts_first() {
    assert_eq!(compare_natural(b"file", b"file1", false), Ordering::Less);
    assert_eq!(compare_natural(b"img1", b"img1a", false), Ordering::Less);
    assert_eq!(compare_natural(b"", b"a", false), Ordering::Less);
    assert_eq!(compare_natural(b"", b"", false), Ordering::Equal);
}

#[test]
fn test_natural_ignores_leading_zeros() {
    assert_eq!(compare_natural(b"img007", b"img7", false), Ordering::Equal);
    assert_eq!(compare_natural(b"img007", b"img10", false), Ordering::Less);
    assert_eq!(compare_natural(b"0", b"000", false), Ordering::Equal);
}

#[test]
fn test_natural_handles_numbers_wider_than_u64() {
    let big = b"x184467440737095516160";
    let bigger = b"x184467440737095516161";
    assert_eq!(compare_natural(big, bigger, false), Ordering::Less);
    assert_eq!(compare_natural(b"x99", big, false), Ordering::Less);
}

#[test]
fn test_natural_compares_every_run_in_turn() {
    assert_eq!(
        sorted(
            SortPolicy::Numeric,
            &["v1.10.0", "v1.2.10", "v1.2.9", "v1.10", "v0.99.1"]
        ),
        vec!["v0.99.1", "v1.2.9", "v1.2.10", "v1.10", "v1.10.0"]
    );
}

#[test]
fn test_natural_digit_run_against_text_run_uses_bytes() {
    // '1' (0x31) sorts before 'a' but after '-'
    assert_eq!(compare_natural(b"x1", b"xa", false), Ordering::Less);
    assert_eq!(compare_natural(b"x1", b"x-", false), Ordering::Greater);
}

#[test]
fn test_case_numeric_folds_text_runs() {
    assert_eq!(
        sorted(SortPolicy::CaseNumeric, &["IMG10.png", "img2.png", "Img1.png"]),
        vec!["Img1.png", "img2.png", "IMG10.png"]
    );
}

#[test]
fn test_lexical_fold_matches_strcasecmp() {
    assert_eq!(compare_lexical(b"ABC", b"abd", true), Ordering::Less);
    assert_eq!(compare_lexical(b"ABC", b"abd", false), Ordering::Less);
    assert_eq!(compare_lexical(b"abc", b"ABD", false), Ordering::Greater);
    assert_eq!(compare_lexical(b"_", b"a", true), Ordering::Less);
    // '_' (0x5F) sits between uppercase and lowercase without folding
    assert_eq!(compare_lexical(b"_", b"A", false), Ordering::Greater);
}

#[test]
fn test_every_policy_yields_non_decreasing_order() {
    let names = [
        "b", "A", "a10", "a2", "A2", "a02", "z", ".hidden", "10", "9", "a", "Z1", "z01", "~", "",
    ];
    for policy in SortPolicy::ALL {
        let result = sorted(policy, &names);
        assert_eq!(result.len(), names.len());
        for pair in result.windows(2) {
            assert_ne!(
                policy.compare(OsStr::new(&pair[0]), OsStr::new(&pair[1])),
                Ordering::Greater,
                "{:?}: {:?} came before {:?}",
                policy,
                pair[0],
                pair[1]
            );
        }
    }
}

#[test]
fn test_raw_values_round_trip() {
    for policy in SortPolicy::ALL {
        assert_eq!(SortPolicy::from_raw(policy.as_raw()), Some(policy));
    }
    assert_eq!(SortPolicy::from_raw(4), None);
    assert_eq!(SortPolicy::from_raw(-1), None);
}

#[test]
fn test_policy_serializes_in_camel_case() {
    assert_eq!(
        serde_json::to_string(&SortPolicy::CaseNumeric).unwrap(),
        "\"caseNumeric\""
    );
    let parsed: SortPolicy = serde_json::from_str("\"caseAlpha\"").unwrap();
    assert_eq!(parsed, SortPolicy::CaseAlpha);
}
