//! Every locale must define exactly the message ids of the en-US fallback.
//!
//! To add a locale, create `ui/i18n/<locale>/lychee-ui.ftl` with every key
//! from en-US and register it in `LOCALES` below.

use std::collections::BTreeSet;

const EN_US: &str = include_str!("../i18n/en-US/lychee-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", include_str!("../i18n/es-ES/lychee-ui.ftl"))];

/// Message ids in definition order, duplicates included.
fn ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .collect()
}

fn assert_unique(locale: &str, src: &str) -> BTreeSet<String> {
    let list = ids(src);
    let set: BTreeSet<String> = list.iter().map(|id| id.to_string()).collect();
    assert_eq!(set.len(), list.len(), "{locale} defines a key twice");
    set
}

#[test]
fn fallback_is_not_empty() {
    assert!(!assert_unique("en-US", EN_US).is_empty());
}

#[test]
fn locales_match_fallback_keys() {
    let fallback = assert_unique("en-US", EN_US);
    let mut report = Vec::new();

    for (locale, src) in LOCALES {
        let keys = assert_unique(locale, src);
        let missing: Vec<_> = fallback.difference(&keys).collect();
        let extra: Vec<_> = keys.difference(&fallback).collect();
        if !missing.is_empty() {
            report.push(format!("{locale} missing: {missing:?}"));
        }
        if !extra.is_empty() {
            report.push(format!("{locale} has unknown keys: {extra:?}"));
        }
    }

    assert!(report.is_empty(), "{}", report.join("\n"));
}
