//! Validation for the ai, learner, and speech sections.

use crate::schema::TutorConfig;

use super::helpers::{validate_non_empty, validate_range, validate_range_f64};

pub(crate) fn validate_ai(errors: &mut Vec<String>, config: &TutorConfig) {
    validate_non_empty(errors, "ai.model", &config.ai.model);
    validate_non_empty(errors, "ai.api_key_env", &config.ai.api_key_env);
    validate_range(errors, "ai.max_tokens", config.ai.max_tokens, 1, 32768);
    validate_range_f64(errors, "ai.temperature", config.ai.temperature, 0.0, 2.0);

    let url = config.ai.base_url.trim();
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        errors.push(format!("ai.base_url = {url:?} must be an http(s) URL"));
    }
}

pub(crate) fn validate_learner(errors: &mut Vec<String>, config: &TutorConfig) {
    validate_non_empty(errors, "learner.level", &config.learner.level);
}

pub(crate) fn validate_speech(errors: &mut Vec<String>, config: &TutorConfig) {
    validate_non_empty(errors, "speech.whisper_model", &config.speech.whisper_model);
    validate_non_empty(errors, "speech.api_key_env", &config.speech.api_key_env);
}
