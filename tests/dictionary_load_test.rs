//! Integration tests for loading synonym dictionaries from disk.

use std::fs;

use synrewrite::prelude::*;
use tempfile::TempDir;

fn write_source(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_groups_file() -> Result<()> {
    let dict = SynonymDictionary::load_from_file("resources/synonyms.json")?;

    assert_eq!(dict.stats().groups, 6);
    assert_eq!(dict.stats().overwritten_terms, 0);
    assert_eq!(dict.max_phrase_words(), 2);
    assert_eq!(dict.canonical("earbuds"), Some("air pods"));

    Ok(())
}

#[test]
fn test_load_canonical_file() -> Result<()> {
    let dict = SynonymDictionary::load_from_file("resources/synonyms_canonical.json")?;

    let group = dict.lookup("ноутбук").unwrap();
    assert_eq!(group.members(), &["laptop", "notebook", "ноутбук"]);

    Ok(())
}

#[test]
fn test_last_write_wins_follows_document_order() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "conflict.json",
        r#"{
            "телефон": ["samsung"],
            "самсунг": ["samsung", "galaxy"]
        }"#,
    );

    let dict = SynonymDictionary::load_from_file(&path)?;
    assert_eq!(dict.canonical("samsung"), Some("самсунг"));
    assert_eq!(dict.stats().overwritten_terms, 1);
    assert_eq!(
        rewrite("айфон galaxy", &dict),
        "(айфон (самсунг OR samsung OR galaxy))"
    );

    Ok(())
}

#[test]
fn test_mixed_case_source_is_normalized() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = write_source(&dir, "mixed.json", r#"[["Air   Pods", "AIRPODS", "airpods"]]"#);

    let dict = SynonymDictionary::load_from_file(&path)?;
    assert_eq!(dict.lookup("airpods").unwrap().members(), &["air pods", "airpods"]);

    Ok(())
}

#[test]
fn test_malformed_sources_fail_to_load() {
    let dir = TempDir::new().unwrap();

    for (name, content) in [
        ("truncated.json", "[[\"phone\", \"telephone\"]"),
        ("scalar.json", "\"phone\""),
        ("flat.json", "[\"phone\", \"telephone\"]"),
        ("numbers.json", "{\"phone\": [1, 2]}"),
    ] {
        let path = write_source(&dir, name, content);
        let err = SynonymDictionary::load_from_file(&path).unwrap_err();
        assert!(err.is_load(), "{name} should be a load error, got {err}");
        assert!(err.to_string().contains(name));
    }
}

#[test]
fn test_config_file_builds_rewriter() -> Result<()> {
    let rewriter = RewriterConfig::load_from_file("resources/rewriter.json")?.build_rewriter()?;
    assert_eq!(rewriter.tokenizer_name(), "quoted_phrase");
    assert_eq!(rewriter.rewrite("tv"), "((tv OR television OR телевизор))");

    Ok(())
}

#[test]
fn test_config_with_bad_dictionary_fails() {
    let dir = TempDir::new().unwrap();
    let dict_path = write_source(&dir, "bad.json", "not json");
    let config = RewriterConfig::default().with_dictionary_path(&dict_path);

    let err = config.build_rewriter().unwrap_err();
    assert!(err.is_load());
}

#[test]
fn test_member_with_double_quote_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = write_source(
        &dir,
        "inches.json",
        r#"[["tv", "television"], ["55\" tv", "big tv"]]"#,
    );

    let err = SynonymDictionary::load_from_file(&path).unwrap_err();
    assert!(err.is_load());
    assert!(err.to_string().contains("group 1: member 0"));
}
