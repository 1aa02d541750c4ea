//! Session tests against a scripted in-memory chat backend.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::*;
use crate::prompts::{
    GRAMMAR_FALLBACK, MESSAGE_FALLBACK, PRONUNCIATION_FALLBACK, SEED_ACKNOWLEDGMENT,
};
use crate::token_tracker::PromptKind;
use crate::{
    AiError, ChatBackend, ChatHandle, ConversationContext, LessonKind, Reply, Role, TokenUsage,
    Turn,
};

#[derive(Default)]
struct Script {
    seeds: Vec<Vec<Turn>>,
    sent: Vec<String>,
    replies: VecDeque<Result<Reply, AiError>>,
}

/// Backend whose chats answer from a queue of canned results.
/// An empty queue behaves like an unreachable service.
#[derive(Clone, Default)]
struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
}

impl ScriptedBackend {
    fn reply(&self, text: &str) {
        self.reply_with_usage(text, TokenUsage::default());
    }

    fn reply_with_usage(&self, text: &str, usage: TokenUsage) {
        self.script.lock().unwrap().replies.push_back(Ok(Reply {
            text: text.to_string(),
            usage,
        }));
    }

    fn fail(&self) {
        self.script
            .lock()
            .unwrap()
            .replies
            .push_back(Err(AiError::Network("connection reset".into())));
    }

    fn seeds(&self) -> Vec<Vec<Turn>> {
        self.script.lock().unwrap().seeds.clone()
    }

    fn sent(&self) -> Vec<String> {
        self.script.lock().unwrap().sent.clone()
    }
}

struct ScriptedChat {
    script: Arc<Mutex<Script>>,
}

impl ChatBackend for ScriptedBackend {
    fn start_chat(&self, history: Vec<Turn>) -> Box<dyn ChatHandle> {
        self.script.lock().unwrap().seeds.push(history);
        Box::new(ScriptedChat {
            script: Arc::clone(&self.script),
        })
    }
}

#[async_trait]
impl ChatHandle for ScriptedChat {
    async fn send(&mut self, text: &str) -> Result<Reply, AiError> {
        let mut script = self.script.lock().unwrap();
        script.sent.push(text.to_string());
        script
            .replies
            .pop_front()
            .unwrap_or_else(|| Err(AiError::Network("unreachable".into())))
    }
}

fn grammar_context() -> ConversationContext {
    ConversationContext::new("intermediate", "grammar")
}

#[test]
fn construction_sends_two_turn_seed() {
    let backend = ScriptedBackend::default();
    let _session = ConversationSession::new(&backend, grammar_context());

    let seeds = backend.seeds();
    assert_eq!(seeds.len(), 1);
    let seed = &seeds[0];
    assert_eq!(seed.len(), 2);
    assert_eq!(seed[0].role, Role::User);
    assert_eq!(
        seed[0].text,
        "You are an English language tutor. The student's level is intermediate. \
         They want to focus on grammar. Please adjust your responses accordingly."
    );
    assert_eq!(seed[1], Turn::assistant(SEED_ACKNOWLEDGMENT));
    assert!(backend.sent().is_empty());
}

#[test]
fn seeds_differ_only_in_focus() {
    let backend = ScriptedBackend::default();
    let _a = ConversationSession::new(&backend, ConversationContext::new("beginner", "grammar"));
    let _b = ConversationSession::new(
        &backend,
        ConversationContext::new("beginner", "pronunciation"),
    );

    let seeds = backend.seeds();
    assert_eq!(seeds[0][1], seeds[1][1]);
    assert_ne!(seeds[0][0], seeds[1][0]);
    assert_eq!(
        seeds[0][0].text.replace("focus on grammar", "focus on pronunciation"),
        seeds[1][0].text
    );
}

#[test]
fn mutating_callers_context_does_not_affect_session() {
    let backend = ScriptedBackend::default();
    let mut ctx = grammar_context();
    let session = ConversationSession::new(&backend, ctx.clone());
    ctx.focus_area = "pronunciation".into();

    assert_eq!(session.context().focus_area, "grammar");
    assert!(backend.seeds()[0][0].text.contains("focus on grammar"));
}

#[tokio::test]
async fn send_message_passes_text_through_unchanged() {
    let backend = ScriptedBackend::default();
    backend.reply("  Hello there!\nHow are you?  ");
    let mut session = ConversationSession::new(&backend, grammar_context());

    let reply = session.send_message("Hi, I want to practice.").await;

    assert_eq!(reply, "  Hello there!\nHow are you?  ");
    assert_eq!(backend.sent(), ["Hi, I want to practice."]);
}

#[tokio::test]
async fn send_message_forwards_empty_input() {
    let backend = ScriptedBackend::default();
    backend.reply("Could you say that again?");
    let mut session = ConversationSession::new(&backend, grammar_context());

    assert_eq!(session.send_message("").await, "Could you say that again?");
    assert_eq!(backend.sent(), [""]);
}

#[tokio::test]
async fn send_message_falls_back_on_failure() {
    let backend = ScriptedBackend::default();
    backend.fail();
    let mut session = ConversationSession::new(&backend, grammar_context());

    assert_eq!(session.send_message("hello").await, MESSAGE_FALLBACK);
}

#[tokio::test]
async fn grammar_feedback_returns_remote_text() {
    let backend = ScriptedBackend::default();
    backend.reply("Use 'goes' for third person singular.");
    let mut session = ConversationSession::new(&backend, grammar_context());

    let reply = session.get_grammar_feedback("He go to school everyday.").await;

    assert_eq!(reply, "Use 'goes' for third person singular.");
    let sent = backend.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("\"He go to school everyday.\""));
    assert!(sent[0].contains("1. Grammar accuracy"));
}

#[tokio::test]
async fn grammar_feedback_falls_back_on_failure() {
    let backend = ScriptedBackend::default();
    backend.fail();
    let mut session = ConversationSession::new(&backend, grammar_context());

    let reply = session.get_grammar_feedback("anything").await;

    assert_eq!(
        reply,
        "I apologize, but I encountered an error analyzing your grammar."
    );
}

#[tokio::test]
async fn pronunciation_feedback_wraps_transcript() {
    let backend = ScriptedBackend::default();
    backend.reply("Nice work on the 'th' sound.");
    let mut session = ConversationSession::new(
        &backend,
        ConversationContext::new("beginner", "pronunciation"),
    );

    let reply = session
        .get_pronunciation_feedback("I think this is the thing")
        .await;

    assert_eq!(reply, "Nice work on the 'th' sound.");
    let sent = backend.sent();
    assert!(sent[0].contains("analyze this speech: \"I think this is the thing\""));
    assert!(sent[0].contains("1. Pronunciation accuracy"));
}

#[tokio::test]
async fn each_operation_has_its_own_fallback() {
    let backend = ScriptedBackend::default();
    let mut session = ConversationSession::new(&backend, grammar_context());

    let message = session.send_message("a").await;
    let pronunciation = session.get_pronunciation_feedback("b").await;
    let grammar = session.get_grammar_feedback("c").await;

    assert_eq!(message, MESSAGE_FALLBACK);
    assert_eq!(pronunciation, PRONUNCIATION_FALLBACK);
    assert_eq!(grammar, GRAMMAR_FALLBACK);
    assert_ne!(message, pronunciation);
    assert_ne!(message, grammar);
    assert_ne!(pronunciation, grammar);
}

#[tokio::test]
async fn failures_do_not_stick() {
    let backend = ScriptedBackend::default();
    backend.fail();
    backend.fail();
    backend.reply("Back online.");
    let mut session = ConversationSession::new(&backend, grammar_context());

    assert_eq!(session.send_message("one").await, MESSAGE_FALLBACK);
    assert_eq!(session.send_message("two").await, MESSAGE_FALLBACK);
    assert_eq!(session.send_message("three").await, "Back online.");
    assert_eq!(backend.sent(), ["one", "two", "three"]);
}

#[tokio::test]
async fn respond_routes_by_lesson_kind() {
    let backend = ScriptedBackend::default();
    backend.reply("chat");
    backend.reply("sounds");
    backend.reply("rules");
    let mut session = ConversationSession::new(&backend, grammar_context());

    assert_eq!(session.respond(LessonKind::Conversation, "hi").await, "chat");
    assert_eq!(session.respond(LessonKind::Pronunciation, "hi").await, "sounds");
    assert_eq!(session.respond(LessonKind::Grammar, "hi").await, "rules");

    let sent = backend.sent();
    assert_eq!(sent[0], "hi");
    assert!(sent[1].contains("analyze this speech"));
    assert!(sent[2].contains("analyze this text"));
}

#[tokio::test]
async fn usage_counts_successful_calls_only() {
    let backend = ScriptedBackend::default();
    backend.reply_with_usage(
        "ok",
        TokenUsage {
            input_tokens: 40,
            output_tokens: 12,
        },
    );
    backend.fail();
    let mut session = ConversationSession::new(&backend, grammar_context());

    session.get_grammar_feedback("first").await;
    session.get_grammar_feedback("second").await;

    let usage = session.usage();
    assert_eq!(usage.call_count(), 1);
    assert_eq!(usage.total_tokens(), 52);
    assert!(usage.for_kind(PromptKind::Grammar).is_some());
    assert!(usage.for_kind(PromptKind::Message).is_none());
}

#[tokio::test]
async fn sessions_are_isolated() {
    let first = ScriptedBackend::default();
    let second = ScriptedBackend::default();
    first.reply("from first");
    second.reply("from second");

    let mut a = ConversationSession::new(&first, ConversationContext::new("beginner", "grammar"));
    let mut b = ConversationSession::new(
        &second,
        ConversationContext::new("beginner", "pronunciation"),
    );

    assert_eq!(b.send_message("x").await, "from second");
    assert_eq!(a.send_message("y").await, "from first");
    assert_eq!(first.sent(), ["y"]);
    assert_eq!(second.sent(), ["x"]);
}
