//! ChatBackend / ChatHandle implementations for Gemini.

use async_trait::async_trait;

use crate::{AiError, ChatBackend, ChatHandle, Reply, Turn};

use super::client::GeminiClient;

/// An open Gemini conversation holding its own turn history.
pub struct GeminiChat {
    client: GeminiClient,
    history: Vec<Turn>,
}

impl ChatBackend for GeminiClient {
    fn start_chat(&self, history: Vec<Turn>) -> Box<dyn ChatHandle> {
        Box::new(GeminiChat {
            client: self.clone(),
            history,
        })
    }
}

#[async_trait]
impl ChatHandle for GeminiChat {
    /// History only grows when the model answers, so a failed send can
    /// simply be retried.
    async fn send(&mut self, text: &str) -> Result<Reply, AiError> {
        let mut turns = self.history.clone();
        turns.push(Turn::user(text));

        let reply = self.client.generate(&turns).await?;

        turns.push(Turn::assistant(reply.text.clone()));
        self.history = turns;
        Ok(reply)
    }
}
