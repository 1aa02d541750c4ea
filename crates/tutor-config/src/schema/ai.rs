//! Chat model configuration.

use serde::{Deserialize, Serialize};

/// Settings for the hosted chat model.
///
/// The credential itself never lives in the file; `api_key_env` names
/// the environment variable it is read from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub model: String,
    /// Valid range: 1-32768.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    pub api_key_env: String,
    pub base_url: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".into(),
            max_tokens: 2048,
            temperature: 0.7,
            api_key_env: "GOOGLE_API_KEY".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".into(),
        }
    }
}
