//! Scans of the fixture tree under `tests/data`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;

use langstat_core::{LanguageType, Sort};
use langstat_engine::{Config, EngineError, IGNORE_NOTHING, Languages};

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn scan(config: &Config, ignored: &[&str]) -> Languages {
    let mut languages = Languages::new();
    languages
        .get_statistics(&[data_dir()], ignored, config)
        .unwrap();
    languages
}

/// The whole fixture tree adds up to the expected totals
#[test]
fn test_fixture_totals() {
    let languages = scan(&Config::default(), &[]);
    let total = languages.total_plain();

    assert_eq!(total["files"], 5);
    assert_eq!(total["lines"], 97);
    assert_eq!(total["code"], 66);
    assert_eq!(total["comments"], 13);
    assert_eq!(total["blanks"], 18);
    assert!(languages.skipped().is_empty());
}

/// Per-language compact view for a single-file language
#[test]
fn test_dockerfile_compact() {
    let languages = scan(&Config::default(), &[]);
    let compact = languages.report_compact_plain();
    let dockerfile = &compact["Dockerfile"];

    assert_eq!(dockerfile["files"], 1);
    assert_eq!(dockerfile["lines"], 16);
    assert_eq!(dockerfile["code"], 7);
    assert_eq!(dockerfile["comments"], 3);
    assert_eq!(dockerfile["blanks"], 6);
}

/// Detected languages, in name order
#[test]
fn test_language_names() {
    let languages = scan(&Config::default(), &[]);
    assert_eq!(languages.language_names(), ["Dockerfile", "Markdown", "Python", "Rust"]);
    assert_eq!(languages.files()["Rust"], 2);
    assert_eq!(languages.files()["Dockerfile"], 1);
    assert_eq!(languages.file_paths()["Rust"].len(), 2);
}

/// Fenced code inside Markdown shows up as a child report named after the file
#[test]
fn test_markdown_children() {
    let languages = scan(&Config::default(), &[]);
    let markdown = languages.lookup(LanguageType::Markdown).unwrap();

    assert_eq!((markdown.comments, markdown.blanks, markdown.code), (3, 1, 0));
    let children = &markdown.children[&LanguageType::Rust];
    assert_eq!(children.len(), 1);
    assert!(children[0].name.ends_with("README.md"));
    assert_eq!((children[0].stats.code, children[0].stats.blanks), (3, 1));

    let summary = markdown.summarise();
    assert_eq!(summary.code, 3);
    assert_eq!(summary.lines(), 8);
}

/// Looking up a language that was not found is an error
#[test]
fn test_lookup_absent_language() {
    let languages = scan(&Config::default(), &[]);
    assert!(matches!(
        languages.lookup(LanguageType::Java),
        Err(EngineError::LanguageNotFound(LanguageType::Java))
    ));
}

/// Doc strings move from code to comments when requested
#[test]
fn test_doc_strings_as_comments() {
    let config = Config::builder().treat_doc_strings_as_comments(true).build().unwrap();
    let languages = scan(&config, &[]);
    let python = languages.lookup(LanguageType::Python).unwrap();

    assert_eq!(python.comments, 7);
    assert_eq!(python.code, 9);
    assert_eq!(python.blanks, 6);
}

/// Ignore globs exclude files; the "nothing" sentinel and empty entries do not
#[test]
fn test_ignore_paths() {
    let languages = scan(&Config::default(), &["*.py"]);
    assert!(languages.get(&LanguageType::Python).is_none());
    assert_eq!(languages.total_plain()["files"], 4);

    let languages = scan(&Config::default(), &[IGNORE_NOTHING, ""]);
    assert_eq!(languages.total_plain()["files"], 5);
}

/// Anchored ignore globs apply under every root, not just the first
#[test]
fn test_ignore_paths_apply_to_every_root() {
    let roots = [tempfile::tempdir().unwrap(), tempfile::tempdir().unwrap()];
    for root in &roots {
        fs::create_dir(root.path().join("gen")).unwrap();
        fs::write(root.path().join("gen").join("x.rs"), "fn x() {}\n").unwrap();
        fs::write(root.path().join("keep.py"), "x = 1\n").unwrap();
    }
    let paths: Vec<PathBuf> = roots.iter().map(|root| root.path().to_path_buf()).collect();

    let mut languages = Languages::new();
    languages
        .get_statistics(&paths, &["gen/*.rs"], &Config::default())
        .unwrap();

    assert!(languages.get(&LanguageType::Rust).is_none(), "{:?}", languages.file_paths());
    assert_eq!(languages.files()["Python"], 2);
}

/// Ignore globs from the config are applied as well
#[test]
fn test_config_ignore_paths() {
    let config = Config::builder().ignore_paths(vec!["*.md".to_string()]).build().unwrap();
    let languages = scan(&config, &[]);
    assert!(languages.get(&LanguageType::Markdown).is_none());
}

/// The `types` restriction limits what is counted
#[test]
fn test_types_restriction() {
    let config = Config::builder().types(vec![LanguageType::Rust]).build().unwrap();
    let languages = scan(&config, &[]);
    assert_eq!(languages.language_names(), ["Rust"]);
    assert_eq!(languages.total_plain()["code"], 45);
}

/// Repeated scans accumulate into the same container
#[test]
fn test_repeated_scans_accumulate() {
    let mut languages = Languages::new();
    let config = Config::default();
    languages.get_statistics(&[data_dir()], &[] as &[&str], &config).unwrap();
    languages.get_statistics(&[data_dir()], &[] as &[&str], &config).unwrap();

    assert_eq!(languages.total_plain()["files"], 10);
    assert_eq!(languages.total_plain()["code"], 132);
}

/// Results do not depend on scheduling
#[test]
fn test_scan_is_deterministic() {
    let first = scan(&Config::default(), &[]);
    let second = scan(&Config::default(), &[]);
    assert_eq!(first, second);
}

/// A pre-set cancel flag yields an empty but valid result
#[test]
fn test_cancelled_scan() {
    let mut languages = Languages::new();
    languages
        .get_statistics_cancellable(&[data_dir()], &[] as &[&str], &Config::default(), &AtomicBool::new(true))
        .unwrap();
    assert!(languages.is_empty());
    assert!(languages.total().is_empty());
}

/// Missing roots are recorded as skipped instead of failing the scan
#[test]
fn test_missing_root_is_skipped() {
    let missing = data_dir().join("does-not-exist");
    let mut languages = Languages::new();
    languages
        .get_statistics(&[missing.clone(), data_dir()], &[] as &[&str], &Config::default())
        .unwrap();

    assert_eq!(languages.total_plain()["files"], 5);
    assert_eq!(languages.skipped().len(), 1);
    assert_eq!(languages.skipped()[0].path, missing);
}

/// Sorting languages by code puts the largest first
#[test]
fn test_sorted_languages() {
    let languages = scan(&Config::default(), &[]);
    let order: Vec<LanguageType> = languages.sorted(Sort::Code).into_iter().map(|(lang, _)| lang).collect();
    assert_eq!(
        order,
        [LanguageType::Rust, LanguageType::Python, LanguageType::Dockerfile, LanguageType::Markdown]
    );
}

/// Summarising is idempotent across the whole container
#[test]
fn test_summarise_idempotent() {
    let languages = scan(&Config::default(), &[]);
    let once = languages.summarise();
    assert_eq!(once.summarise(), once);
}
