//! Speech-to-text configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub whisper_model: String,
    pub api_key_env: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            whisper_model: "whisper-1".into(),
            api_key_env: "OPENAI_API_KEY".into(),
        }
    }
}
