use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "profilescope_ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

const FALLBACK_LOCALE: &str = "en-US";

/// Extract message IDs from a Fluent file. Any line of the form
/// `<identifier> =` is a message; comments, terms (`-` prefix),
/// attributes and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for line in content.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() && id.chars().all(valid_key_char) {
                keys.insert(id.to_string());
            }
        }
    }
    keys
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect every literal key passed to `t!("...")` under `src/`.
/// Dynamic IDs and direct `fl!` calls are not seen.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    const NEEDLE: &str = "t!(\"";

    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let mut rest = content.as_str();
        while let Some(pos) = rest.find(NEEDLE) {
            rest = &rest[pos + NEEDLE.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
                rest = &rest[end..];
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn load_keys(i18n_root: &Path, locale: &str) -> BTreeSet<String> {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_keys = load_keys(&i18n_root, FALLBACK_LOCALE);
    assert!(!fallback_keys.is_empty(), "no message keys in fallback FTL");

    // Every key used in the sources exists in the fallback.
    let used = referenced_keys(&crate_root.join("src"));
    let missing_in_fallback: Vec<_> = used.difference(&fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "keys referenced in src/ but missing in {FALLBACK_LOCALE}:\n  {}",
        missing_in_fallback.join("\n  ")
    );

    // Every fallback key is actually used.
    let unused: Vec<_> = fallback_keys.difference(&used).cloned().collect();
    assert!(
        unused.is_empty(),
        "keys in {FALLBACK_LOCALE} never referenced from src/:\n  {}",
        unused.join("\n  ")
    );

    // Every locale carries exactly the fallback's keys.
    let mut report: BTreeMap<String, (Vec<String>, Vec<String>)> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let keys = load_keys(&i18n_root, &locale);
        let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback_keys).cloned().collect();
        if !missing.is_empty() || !extra.is_empty() {
            report.insert(locale, (missing, extra));
        }
    }

    if !report.is_empty() {
        let mut msg = String::from("locales out of sync with fallback:\n");
        for (locale, (missing, extra)) in report {
            msg.push_str(&format!(
                "  {locale}: missing [{}], extra [{}]\n",
                missing.join(", "),
                extra.join(", ")
            ));
        }
        panic!("{msg}");
    }
}

#[test]
fn latvian_locale_is_shipped() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    assert_eq!(locale_dirs(&i18n_root), vec!["en-US", "lv-LV"]);
}

#[test]
fn ftl_files_are_named_after_the_crate_domain() {
    // `fl!` resolves its domain from the crate name, where `-` becomes `_`.
    let domain = env!("CARGO_PKG_NAME").replace('-', "_");
    assert_eq!(FTL_FILENAME, format!("{domain}.ftl"));

    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        assert!(path.is_file(), "missing {}", path.display());
    }
}
