//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod misc;


use crate::schema::TutorConfig;
use tutor_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TutorConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    misc::validate_ai(&mut errors, config);
    misc::validate_learner(&mut errors, config);
    misc::validate_speech(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
