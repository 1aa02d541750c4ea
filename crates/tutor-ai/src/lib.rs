//! Tutoring conversation engine.
//!
//! Wraps a single stateful chat against a hosted language model and
//! exposes tutoring-shaped requests over it:
//! - Session seeding from a learner context (level, focus area)
//! - Free-form messages plus pronunciation and grammar feedback prompts
//! - Fail-soft replies: remote failures become fixed fallback strings
//! - Gemini chat backend and Whisper speech-to-text client
//! - Token usage tracking per prompt kind

pub mod context;
pub mod gemini;
pub mod lesson;
pub mod prompts;
pub mod session;
pub mod token_tracker;
pub mod whisper;

use async_trait::async_trait;

pub use context::ConversationContext;
pub use gemini::{GeminiClient, GeminiConfig};
pub use lesson::LessonKind;
pub use session::ConversationSession;
pub use token_tracker::{PromptKind, TokenTracker};
pub use whisper::{SpeechToText, WhisperClient, WhisperConfig};

/// A remote chat service that can open seeded conversations.
///
/// Opening a chat never fails; problems reaching the service show up
/// as an error on the first [`ChatHandle::send`].
pub trait ChatBackend: Send + Sync {
    fn start_chat(&self, history: Vec<Turn>) -> Box<dyn ChatHandle>;
}

/// One open conversation. Turn history is append-only and lives with
/// the handle, so a handle must only ever be driven from one place.
#[async_trait]
pub trait ChatHandle: Send {
    async fn send(&mut self, text: &str) -> Result<Reply, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Not configured: {0}")]
    NotConfigured(String),
}
