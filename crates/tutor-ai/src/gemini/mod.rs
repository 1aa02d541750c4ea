//! Google Gemini chat backend.
//!
//! Implements `ChatBackend` for Gemini models via the Generative
//! Language API. Each chat keeps its own turn history and replays it
//! with every `generateContent` call.

mod api;
mod client;
mod config;

#[cfg(test)]
mod test_server;

pub use api::GeminiChat;
pub use client::GeminiClient;
pub use config::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
