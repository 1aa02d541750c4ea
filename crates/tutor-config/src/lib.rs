//! Tutor configuration system.
//!
//! TOML-based configuration for the chat model, learner defaults,
//! speech-to-text, and logging. All sections use defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tutor_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.ai.model);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{LogLevel, TutorConfig, CONFIG_SCHEMA_VERSION};
pub use toml_writer::{config_to_toml, save_config_to_path};

use std::path::Path;

use tutor_common::ConfigError;

/// Load config from the platform default path, creating a default file
/// if none exists, and validate the result.
pub fn load_config() -> Result<TutorConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Like [`load_config`], but from an explicit path.
pub fn load_config_from(path: &Path) -> Result<TutorConfig, ConfigError> {
    let config = toml_loader::load_or_create(path)?;
    validation::validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ai]\nmax_tokens = 0\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_from_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh").join("config.toml");

        let config = load_config_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.learner.level, "intermediate");
    }
}
