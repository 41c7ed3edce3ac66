//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    ConfigLoader, DictionaryConfig, InvalidWordPolicy, LexiconConfig, LogConfig, QueryConfig,
    ReportFormat, Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = LexiconConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.dictionary.path, PathBuf::from("dictionary.txt"));
    assert_eq!(
        config.query.words,
        vec!["notaword", "ucf", "no", "note", "corg"]
    );
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = LexiconConfig::default();

    config.dictionary.max_words = 0;
    assert!(config.validate().is_err());

    config.dictionary.max_words = 10;
    config.dictionary.max_word_length = 0;
    assert!(config.validate().is_err());

    config.dictionary.max_word_length = 20;
    config.query.words.clear();
    assert!(config.validate().is_err());

    config.query.words.push("corg".to_string());
    config.log.level = "loud".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_content = r#"
    [dictionary]
    path = "/srv/words.txt"
    deduplicate = true
    on_invalid = "skip"

    [query]
    words = ["alpha", "beta"]
    format = "json"
    "#;
    let config_path = fixture.create_file("config_file_test.toml", config_content).unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.dictionary.path, PathBuf::from("/srv/words.txt"));
    assert!(config.dictionary.deduplicate);
    assert_eq!(config.dictionary.on_invalid, InvalidWordPolicy::Skip);
    assert_eq!(config.query.words, vec!["alpha", "beta"]);
    assert_eq!(config.query.format, ReportFormat::Json);

    // Untouched values keep their defaults
    assert!(config.dictionary.skip_blank_lines);
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "dictionary": { "max_words": 42 } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert_eq!(config.dictionary.max_words, 42);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[dictionary]\npath = \"file.txt\"\n")
        .unwrap();

    fixture.set_env("TEST_ENV__DICTIONARY__PATH", "env.txt");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(config.dictionary.path, PathBuf::from("env.txt"));
    assert_eq!(config.log.level, "debug");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let loader = ConfigLoader::new(Some("/definitely/not/here.toml"), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("invalid.toml", "[dictionary\npath = words.txt\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    match loader.load() {
        Err(ConfigError::ParseError { origin, .. }) => assert!(origin.contains("invalid.toml")),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

/// Test that an unknown file extension is rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.create_file("config.ini", "").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(
        loader.load(),
        Err(ConfigError::UnsupportedFormat { ref path }) if path == &config_path
    ));
}

/// Test that a file with invalid values fails validation on load.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.toml", "[log]\nlevel = \"verbose\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_VALIDATE");
    let err = loader.load().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            section: "log",
            key: "level",
            ..
        }
    ));
    assert!(err.to_string().starts_with("Invalid [log] level: unknown level \"verbose\""));
}

/// Test that validation fails for various invalid sections.
#[test]
fn test_specific_validation_rules() {
    let mut dictionary = DictionaryConfig::default();
    dictionary.path = PathBuf::new();
    assert!(matches!(
        dictionary.validate(),
        Err(ConfigError::InvalidValue { section: "dictionary", key: "path", .. })
    ));

    let query = QueryConfig {
        words: Vec::new(),
        ..Default::default()
    };
    let err = query.validate().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid [query] words: at least one query word is required"
    );

    let log = LogConfig {
        level: String::new(),
        ..Default::default()
    };
    assert!(log.validate().is_err());
}

/// Test that the dictionary section maps onto loader options.
#[test]
fn test_loader_options_from_config() {
    let mut dictionary = DictionaryConfig::default();
    dictionary.deduplicate = true;
    dictionary.max_words = 7;
    dictionary.max_word_length = 12;

    let options = dictionary.loader_options();
    assert!(options.deduplicate);
    assert!(options.skip_blank_lines);
    assert_eq!(options.max_words, 7);
    assert_eq!(options.max_word_length, 12);
}

/// Test that the default configuration survives a TOML round trip, as written by `gen-config`.
#[test]
fn test_generated_config_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&LexiconConfig::default()).unwrap();
    let config_path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config.query.words.len(), 5);
    assert_eq!(config.dictionary.on_invalid, InvalidWordPolicy::Abort);
}
