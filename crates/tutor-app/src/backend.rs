//! Build the remote clients from configuration.
//!
//! Credentials are resolved here, once, from the environment variables
//! the config names, and handed to the clients explicitly.

use tracing::warn;
use tutor_ai::{AiError, GeminiClient, GeminiConfig, WhisperClient, WhisperConfig};
use tutor_config::schema::{AiConfig, SpeechConfig};

/// A missing API key is not fatal: the client is built with an empty
/// key and every request falls back until the key is provided.
pub fn gemini_client(config: &AiConfig) -> Result<GeminiClient, AiError> {
    let gemini = GeminiConfig::from_env_var(&config.api_key_env).unwrap_or_else(|e| {
        warn!("{e} Tutor replies will fall back until it is set.");
        GeminiConfig::new("")
    });

    GeminiClient::new(
        gemini
            .with_model(&config.model)
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature)
            .with_base_url(&config.base_url),
    )
}

pub fn whisper_client(config: &SpeechConfig, language: &str) -> Result<WhisperClient, AiError> {
    let whisper = WhisperConfig::from_env_var(&config.api_key_env)?
        .with_model(&config.whisper_model)
        .with_language(language);
    WhisperClient::new(whisper)
}
