use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "portfolio-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Comments, terms (`-` prefix),
/// attributes and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every literal key passed to `t!(...)` in `.rs` files under `root`.
/// Keys built at runtime or looked up through `fl!` directly are not seen.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];
    let needle = ["t", "!(\""].concat();

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (pos, _) in content.match_indices(&needle) {
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
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

fn keys_for(i18n_root: &Path, locale: &str) -> BTreeSet<String> {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Locale {locale} has no readable {path:?}: {err}"));
    parse_ftl_keys(&content)
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_keys = keys_for(&i18n_root, "en-US");
    assert!(!fallback_keys.is_empty(), "No message keys in the en-US bundle");

    let referenced = referenced_keys(&crate_root.join("src"));
    let missing: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in en-US:\n{}",
        missing.join("\n")
    );

    let unused: Vec<_> = fallback_keys.difference(&referenced).cloned().collect();
    assert!(
        unused.is_empty(),
        "en-US defines keys no component uses:\n{}",
        unused.join("\n")
    );

    let locales = locale_dirs(&i18n_root);
    assert!(locales.iter().any(|l| l == "ko-KR"), "ko-KR bundle missing");

    for locale in locales {
        let keys = keys_for(&i18n_root, &locale);
        assert_eq!(
            keys, fallback_keys,
            "Locale {locale} does not define exactly the en-US keys"
        );
    }
}

#[test]
fn parser_skips_comments_terms_and_attributes() {
    let src = "# comment\n-brand = X\nnav-print = Print\n    .title = attr\nnav-brand=Y\n";
    let keys: Vec<_> = parse_ftl_keys(src).into_iter().collect();
    assert_eq!(keys, ["nav-brand", "nav-print"]);
}
