//! Write TutorConfig to TOML on disk.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated config behind.

use std::path::Path;

use tutor_common::ConfigError;

use crate::schema::TutorConfig;

/// Write config to a specific path, creating parent directories.
pub fn save_config_to_path(config: &TutorConfig, path: &Path) -> Result<(), ConfigError> {
    let toml_str = config_to_toml(config)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    std::fs::write(&tmp_path, &toml_str).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write config to {}: {e}",
            tmp_path.display()
        ))
    })?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename can fail across filesystems or on Windows.
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, &toml_str).map_err(|e2| {
            ConfigError::ParseError(format!(
                "failed to write config to {}: {e2}",
                path.display()
            ))
        })?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

/// Serialize a config to a pretty TOML string.
pub fn config_to_toml(config: &TutorConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))
}
