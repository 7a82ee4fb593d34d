// tests/config_tests.rs
use cheatsheet::config::Config;
use cheatsheet::consts::{
    DEFAULT_BLOCK_SEPARATOR, DEFAULT_DATE_FORMAT, DEFAULT_MARKDOWN_ESCAPING_CHARS,
    DEFAULT_MASK_SYMBOL, DEFAULT_UTC_OFFSET_SECONDS,
};
use cheatsheet::error::CheatSheetError;
use std::fs;
use tempfile::tempdir;

mod support;
use support::init_tracing;

#[test]
fn test_defaults_match_constants() {
    init_tracing();
    let conf = Config::default();
    assert_eq!(conf.dates.format, DEFAULT_DATE_FORMAT);
    assert_eq!(conf.dates.utc_offset_seconds, DEFAULT_UTC_OFFSET_SECONDS);
    assert_eq!(conf.masking.symbol, DEFAULT_MASK_SYMBOL);
    assert_eq!(conf.formatting.block_separator, DEFAULT_BLOCK_SEPARATOR);
    assert_eq!(conf.markdown.escaping_chars, DEFAULT_MARKDOWN_ESCAPING_CHARS);
}

#[test]
fn test_empty_toml_is_all_defaults() {
    init_tracing();
    assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
}

#[test]
fn test_partial_toml_overrides_only_given_fields() {
    init_tracing();
    let conf = Config::from_toml_str(
        r##"
        [dates]
        utc_offset_seconds = 0

        [masking]
        symbol = "#"
        "##,
    )
    .unwrap();

    assert_eq!(conf.dates.utc_offset_seconds, 0);
    assert_eq!(conf.dates.format, DEFAULT_DATE_FORMAT);
    assert_eq!(conf.masking.symbol, '#');
    assert_eq!(conf.formatting.block_separator, DEFAULT_BLOCK_SEPARATOR);
}

#[test]
fn test_invalid_toml_is_config_error() {
    init_tracing();
    let result = Config::from_toml_str("[masking]\nsymbol = \"too long\"\n");
    assert!(matches!(result, Err(CheatSheetError::Config(_))));
}

#[test]
fn test_from_path_reads_file() {
    init_tracing();
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[formatting]\nblock_separator = \" \"\n\n[markdown]\nescaping_chars = [\"*\"]\n",
    )
    .unwrap();

    let conf = Config::from_path(&path).unwrap();
    assert_eq!(conf.formatting.block_separator, " ");
    assert_eq!(conf.markdown.escaping_chars, vec!["*".to_string()]);
}

#[test]
fn test_from_path_missing_file_is_io_error() {
    init_tracing();
    let dir = tempdir().unwrap();
    let result = Config::from_path(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(CheatSheetError::Io(_))));
}

#[test]
fn test_load_returns_same_instance() {
    init_tracing();
    let a = cheatsheet::load_config();
    let b = cheatsheet::load_config();
    assert!(std::ptr::eq(a, b));
}
