//! Async request methods for ConversationSession.

use tracing::error;

use crate::lesson::LessonKind;
use crate::prompts::{
    grammar_prompt, pronunciation_prompt, GRAMMAR_FALLBACK, MESSAGE_FALLBACK,
    PRONUNCIATION_FALLBACK,
};
use crate::token_tracker::PromptKind;

use super::manager::ConversationSession;

impl ConversationSession {
    /// Send `message` as the next user turn and return the reply text.
    pub async fn send_message(&mut self, message: &str) -> String {
        self.send_or(PromptKind::Message, message, MESSAGE_FALLBACK)
            .await
    }

    /// Ask for pronunciation feedback on a speech transcript.
    pub async fn get_pronunciation_feedback(&mut self, audio_transcript: &str) -> String {
        let prompt = pronunciation_prompt(audio_transcript);
        self.send_or(PromptKind::Pronunciation, &prompt, PRONUNCIATION_FALLBACK)
            .await
    }

    /// Ask for grammar feedback on a piece of written text.
    pub async fn get_grammar_feedback(&mut self, text: &str) -> String {
        let prompt = grammar_prompt(text);
        self.send_or(PromptKind::Grammar, &prompt, GRAMMAR_FALLBACK)
            .await
    }

    /// Route learner input to the request shape matching the lesson.
    pub async fn respond(&mut self, lesson: LessonKind, input: &str) -> String {
        match lesson {
            LessonKind::Pronunciation => self.get_pronunciation_feedback(input).await,
            LessonKind::Grammar => self.get_grammar_feedback(input).await,
            LessonKind::Conversation => self.send_message(input).await,
        }
    }

    async fn send_or(&mut self, kind: PromptKind, prompt: &str, fallback: &str) -> String {
        match self.handle.send(prompt).await {
            Ok(reply) => {
                self.tracker.record(kind, &reply.usage);
                reply.text
            }
            Err(e) => {
                error!(%kind, "Tutor request failed: {e}");
                fallback.to_string()
            }
        }
    }
}
