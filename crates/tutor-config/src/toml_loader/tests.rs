//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::LogLevel;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_tutor_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, tutor_common::ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[ai]
model = "gemini-1.5-flash"
temperature = 0.2

[learner]
level = "beginner"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.ai.model, "gemini-1.5-flash");
    assert_eq!(config.ai.temperature, 0.2);
    assert_eq!(config.learner.level, "beginner");
    // Defaults preserved
    assert_eq!(config.ai.api_key_env, "GOOGLE_API_KEY");
    assert_eq!(config.logging.level, LogLevel::Info);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, tutor_common::ConfigError::ParseError(_)));
}

#[test]
fn load_keeps_out_of_range_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[ai]\ntemperature = 9.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.ai.temperature, 9.0);
}

#[test]
fn load_or_create_writes_template_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tutor").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.ai.model, "gemini-pro");

    let reloaded = load_from_path(&path).unwrap();
    assert_eq!(reloaded.learner.level, "intermediate");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::TutorConfig;

    let content = default_config_toml();
    let config: TutorConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.ai.max_tokens, 2048);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    // Not every CI environment has a config dir.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("tutor"));
        assert!(path_str.ends_with("config.toml"));
    }
}
