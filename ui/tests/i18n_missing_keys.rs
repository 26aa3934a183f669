use std::collections::{BTreeSet, HashSet};

/// Every locale must provide at least the keys of the fallback (de-DE)
/// `folio-ui.ftl`.
///
/// Lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute / continuation lines
#[test]
fn all_locales_have_all_fallback_keys() {
    const DE_DE: &str = include_str!("../i18n/de-DE/folio-ui.ftl");
    const EN_US: &str = include_str!("../i18n/en-US/folio-ui.ftl");

    let fallback_keys = extract_keys(DE_DE);

    assert!(
        !fallback_keys.is_empty(),
        "Fallback (de-DE) contains no keys."
    );
    assert_no_dup_keys(DE_DE, "de-DE");

    let locales: &[(&str, &str)] = &[("en-US", EN_US)];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<String> = fallback_keys.difference(&keys).cloned().collect();
        let extra: BTreeSet<String> = keys.difference(&fallback_keys).cloned().collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
        // Both languages switch wholesale, so a key only one side has is a bug too.
        if !extra.is_empty() {
            failures.push(format!(
                "Locale {locale} defines {} key(s) unknown to de-DE:\n  {}",
                extra.len(),
                extra.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}",
            failures.join("\n\n")
        );
    }
}

#[test]
fn copyright_line_takes_the_year() {
    for src in [
        include_str!("../i18n/de-DE/folio-ui.ftl"),
        include_str!("../i18n/en-US/folio-ui.ftl"),
    ] {
        let line = src
            .lines()
            .find(|l| l.trim_start().starts_with("footer-copyright"))
            .expect("footer-copyright defined");
        assert!(line.contains("{ $year }"), "{line}");
    }
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
