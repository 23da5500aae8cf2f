//! Every non-fallback locale must define every message of the fallback
//! (`en-US/fairlens-ui.ftl`), and no file may define a message twice.
//!
//! To add a locale, create `ui/i18n/<locale>/fairlens-ui.ftl`, register it in
//! `LOCALES` below and run `cargo test -p fairlens-ui`.

use std::collections::{BTreeSet, HashSet};

const EN_US: &str = include_str!("../i18n/en-US/fairlens-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", include_str!("../i18n/es-ES/fairlens-ui.ftl"))];

/// Message IDs in definition order, including repeats.
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| {
            !id.is_empty()
                && !id.contains(char::is_whitespace)
                && !id.starts_with('[')
                && !id.starts_with('@')
        })
        .collect()
}

fn assert_no_duplicates(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<&str> = message_ids(src)
        .into_iter()
        .filter(|id| !seen.insert(*id))
        .collect();
    assert!(dups.is_empty(), "Duplicate keys in {locale}: {dups:?}");
}

#[test]
fn all_locales_have_all_fallback_keys() {
    assert_no_duplicates(EN_US, "en-US");
    let fallback: BTreeSet<&str> = message_ids(EN_US).into_iter().collect();
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_duplicates(src, locale);
        let keys: HashSet<&str> = message_ids(src).into_iter().collect();
        let missing: Vec<&&str> = fallback.iter().filter(|k| !keys.contains(**k)).collect();
        if !missing.is_empty() {
            failures.push(format!("{locale} is missing {missing:?}"));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n{}\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n")
    );
}

#[test]
fn no_locale_defines_unknown_keys() {
    let fallback: HashSet<&str> = message_ids(EN_US).into_iter().collect();
    for (locale, src) in LOCALES {
        let extra: Vec<&str> = message_ids(src)
            .into_iter()
            .filter(|k| !fallback.contains(k))
            .collect();
        assert!(extra.is_empty(), "{locale} defines keys absent from en-US: {extra:?}");
    }
}
