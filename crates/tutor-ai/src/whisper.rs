//! OpenAI Whisper API client for speech-to-text.
//!
//! Turns a recorded utterance into a transcript that can be fed to a
//! tutoring session (typically as pronunciation practice input).

use async_trait::async_trait;
use tracing::debug;

use crate::AiError;

const WHISPER_API_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// Anything that can turn audio into text.
#[async_trait]
pub trait SpeechToText: Send + Sync {
    async fn transcribe(&self, audio_data: Vec<u8>, filename: &str) -> Result<String, AiError>;
}

/// Whisper API client configuration.
#[derive(Clone)]
pub struct WhisperConfig {
    pub api_key: String,
    pub model: String,
    pub language: Option<String>,
}

impl std::fmt::Debug for WhisperConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WhisperConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("language", &self.language)
            .finish()
    }
}

impl WhisperConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: "whisper-1".to_string(),
            language: None,
        }
    }

    pub fn from_env_var(var: &str) -> Result<Self, AiError> {
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(AiError::NotConfigured(format!(
                "Whisper API key missing. Set {var}."
            ))),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Whisper takes ISO-639-1 codes, so a locale like `en-US` is cut
    /// down to `en`.
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        let lang = lang.into();
        let code = lang
            .split(['-', '_'])
            .next()
            .unwrap_or(lang.as_str())
            .to_ascii_lowercase();
        self.language = Some(code);
        self
    }
}

/// Whisper speech-to-text client.
pub struct WhisperClient {
    config: WhisperConfig,
    http: reqwest::Client,
}

impl WhisperClient {
    pub fn new(config: WhisperConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(300))
            .build()
            .map_err(|e| AiError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }
}

fn mime_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit('.')
        .next()
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "webm" => "audio/webm",
        "ogg" => "audio/ogg",
        _ => "audio/wav",
    }
}

#[async_trait]
impl SpeechToText for WhisperClient {
    /// `audio_data` should be mp3, mp4, mpeg, mpga, m4a, wav, or webm.
    async fn transcribe(&self, audio_data: Vec<u8>, filename: &str) -> Result<String, AiError> {
        debug!(
            model = %self.config.model,
            size = audio_data.len(),
            "Whisper transcription request"
        );

        let file_part = reqwest::multipart::Part::bytes(audio_data)
            .file_name(filename.to_string())
            .mime_str(mime_for(filename))
            .map_err(|e| AiError::Api(e.to_string()))?;

        let mut form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("model", self.config.model.clone());

        if let Some(ref lang) = self.config.language {
            form = form.text("language", lang.clone());
        }

        let response = self
            .http
            .post(WHISPER_API_URL)
            .bearer_auth(&self.config.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::Parse(e.to_string()))?;

        json["text"]
            .as_str()
            .map(|t| t.trim().to_string())
            .ok_or_else(|| AiError::Parse("no 'text' field in response".to_string()))
    }
}
