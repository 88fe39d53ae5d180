use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures the Korean chrome bundle provides every key present in the
/// fallback (en-US) `portfolio-ui.ftl`, and no extras.
///
/// Only message ids are read:
/// - Comment lines starting with `#` are ignored
/// - Attribute (`.attr =`) and continuation lines are skipped
/// - Terms (`-term =`) are not messages and are skipped
#[test]
fn korean_bundle_matches_fallback_keys() {
    const EN_US: &str = include_str!("../i18n/en-US/portfolio-ui.ftl");
    const KO_KR: &str = include_str!("../i18n/ko-KR/portfolio-ui.ftl");

    assert_no_dup_keys(EN_US, "en-US");
    assert_no_dup_keys(KO_KR, "ko-KR");

    let fallback: BTreeSet<_> = extract_keys(EN_US).into_iter().collect();
    let korean: BTreeSet<_> = extract_keys(KO_KR).into_iter().collect();
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let missing: Vec<_> = fallback.difference(&korean).cloned().collect();
    let extra: Vec<_> = korean.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty() && extra.is_empty(),
        "ko-KR is out of sync with en-US.\n  missing: {missing:?}\n  extra: {extra:?}"
    );
}

#[test]
fn print_label_is_shared() {
    // The print button reads the same in both languages.
    let en = message_value(include_str!("../i18n/en-US/portfolio-ui.ftl"), "nav-print");
    let ko = message_value(include_str!("../i18n/ko-KR/portfolio-ui.ftl"), "nav-print");
    assert_eq!(en.as_deref(), Some("Print / PDF"));
    assert_eq!(en, ko);
}

fn message_lines(src: &str) -> impl Iterator<Item = (&str, &str)> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter(|line| !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .filter(|(key, _)| !key.is_empty() && !key.contains(char::is_whitespace))
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    message_lines(src).map(|(key, _)| key.to_string()).collect()
}

fn message_value(src: &str, key: &str) -> Option<String> {
    message_lines(src)
        .find(|(k, _)| *k == key)
        .map(|(_, value)| value.to_string())
}

/// Assert no duplicate key definitions in a single FTL file.
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = message_lines(src)
        .filter(|(key, _)| !seen.insert(key.to_string()))
        .map(|(key, _)| key.to_string())
        .collect();

    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}
