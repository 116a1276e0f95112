//! Tests for configuration parsing and resolution
//!
//! Covers:
//! - TOML config file parsing, including rejection of unknown keys
//! - Priority order: command line / environment over config file over defaults
//! - Word source selection (bucket, file, embedded)
//! - Port requirement for the bucket source
//!
//! Nothing here reads or writes process environment variables.

use std::io::Write;
use std::path::PathBuf;

use wordmix_common::config::{
    ConfigOverrides, ServiceConfig, TomlConfig, WordsConfig, DEFAULT_PORT, DEFAULT_STATIC_DIR,
};
use wordmix_common::{Error, WordSource};

#[test]
fn test_defaults_without_any_configuration() {
    let config = ServiceConfig::resolve(ConfigOverrides::default(), TomlConfig::default()).unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert!(!config.debug);
    assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    assert_eq!(config.source, WordSource::Embedded);
}

#[test]
fn test_parse_full_config_file() {
    let config = TomlConfig::parse(
        r#"
        port = 9000
        debug = true
        static_dir = "/srv/wordmix"

        [words]
        bucket = "word-lists"
        object = "german.csv"
        storage_url = "http://localhost:4443"
        "#,
    )
    .unwrap();

    assert_eq!(config.port, Some(9000));
    assert_eq!(config.debug, Some(true));
    assert_eq!(config.static_dir, Some(PathBuf::from("/srv/wordmix")));
    assert_eq!(
        config.words,
        WordsConfig {
            file: None,
            bucket: Some("word-lists".to_string()),
            object: Some("german.csv".to_string()),
            storage_url: Some("http://localhost:4443".to_string()),
        }
    );
}

#[test]
fn test_parse_empty_config_file() {
    assert_eq!(TomlConfig::parse("").unwrap(), TomlConfig::default());
}

#[test]
fn test_unknown_keys_are_rejected() {
    let result = TomlConfig::parse("prot = 8080\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let result = TomlConfig::parse("port = \"eighty\"\n");
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_load_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 7000").unwrap();
    writeln!(file, "[words]").unwrap();
    writeln!(file, "file = \"/data/words.csv\"").unwrap();

    let config = TomlConfig::load(Some(file.path())).unwrap();
    assert_eq!(config.port, Some(7000));
    assert_eq!(config.words.file, Some(PathBuf::from("/data/words.csv")));
}

#[test]
fn test_load_missing_explicit_path_fails() {
    let result = TomlConfig::load(Some(PathBuf::from("/nonexistent/wordmix.toml").as_path()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_overrides_win_over_config_file() {
    let overrides = ConfigOverrides {
        port: Some(3000),
        static_dir: Some(PathBuf::from("public")),
        words_file: Some(PathBuf::from("cli.csv")),
        ..Default::default()
    };
    let file = TomlConfig {
        port: Some(9000),
        debug: None,
        static_dir: Some(PathBuf::from("/srv/wordmix")),
        words: WordsConfig {
            file: Some(PathBuf::from("file.csv")),
            ..Default::default()
        },
    };

    let config = ServiceConfig::resolve(overrides, file).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.static_dir, PathBuf::from("public"));
    assert_eq!(config.source, WordSource::File(PathBuf::from("cli.csv")));
}

#[test]
fn test_config_file_fills_gaps() {
    let file = TomlConfig {
        port: Some(9000),
        debug: Some(true),
        static_dir: None,
        words: WordsConfig {
            file: Some(PathBuf::from("file.csv")),
            ..Default::default()
        },
    };

    let config = ServiceConfig::resolve(ConfigOverrides::default(), file).unwrap();
    assert_eq!(config.port, 9000);
    assert!(config.debug);
    assert_eq!(config.source, WordSource::File(PathBuf::from("file.csv")));
}

#[test]
fn test_debug_flag_cannot_be_disabled_by_file() {
    let overrides = ConfigOverrides {
        debug: true,
        ..Default::default()
    };
    let file = TomlConfig {
        debug: Some(false),
        ..Default::default()
    };

    assert!(ServiceConfig::resolve(overrides, file).unwrap().debug);
}

#[test]
fn test_bucket_takes_precedence_over_file() {
    let overrides = ConfigOverrides {
        port: Some(8080),
        words_file: Some(PathBuf::from("words.csv")),
        bucket: Some("word-lists".to_string()),
        ..Default::default()
    };

    let config = ServiceConfig::resolve(overrides, TomlConfig::default()).unwrap();
    assert_eq!(config.source, WordSource::bucket("word-lists"));
}

#[test]
fn test_bucket_settings_merge_across_layers() {
    let overrides = ConfigOverrides {
        port: Some(8080),
        bucket: Some("cli-bucket".to_string()),
        ..Default::default()
    };
    let file = TomlConfig {
        words: WordsConfig {
            object: Some("german.csv".to_string()),
            storage_url: Some("http://localhost:4443".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let config = ServiceConfig::resolve(overrides, file).unwrap();
    assert_eq!(
        config.source,
        WordSource::Bucket {
            base_url: "http://localhost:4443".to_string(),
            bucket: "cli-bucket".to_string(),
            object: "german.csv".to_string(),
        }
    );
}

#[test]
fn test_bucket_source_requires_port() {
    let overrides = ConfigOverrides {
        bucket: Some("word-lists".to_string()),
        ..Default::default()
    };

    let result = ServiceConfig::resolve(overrides, TomlConfig::default());
    match result {
        Err(Error::Config(msg)) => assert!(msg.contains("PORT"), "message: {}", msg),
        other => panic!("expected configuration error, got {:?}", other),
    }
}

#[test]
fn test_blank_bucket_name_is_ignored() {
    let overrides = ConfigOverrides {
        bucket: Some("  ".to_string()),
        ..Default::default()
    };

    let config = ServiceConfig::resolve(overrides, TomlConfig::default()).unwrap();
    assert_eq!(config.source, WordSource::Embedded);
    assert_eq!(config.port, DEFAULT_PORT);
}
