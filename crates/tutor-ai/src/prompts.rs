//! Prompt templates and fallback replies for the tutor.

use crate::context::ConversationContext;
use crate::Turn;

/// Canned acknowledgment the model "gives" to the seed instruction.
pub const SEED_ACKNOWLEDGMENT: &str =
    "I'll help you improve your English, focusing on your specific needs and level.";

pub const MESSAGE_FALLBACK: &str = "I apologize, but I encountered an error. Please try again.";
pub const PRONUNCIATION_FALLBACK: &str =
    "I apologize, but I encountered an error analyzing your pronunciation.";
pub const GRAMMAR_FALLBACK: &str =
    "I apologize, but I encountered an error analyzing your grammar.";

/// Persona instruction sent as the first user turn of every session.
pub fn seed_instruction(user_level: &str, focus_area: &str) -> String {
    format!(
        "You are an English language tutor. The student's level is {user_level}. \
         They want to focus on {focus_area}. Please adjust your responses accordingly."
    )
}

/// The two opening turns a session is started with.
pub fn seed_exchange(context: &ConversationContext) -> Vec<Turn> {
    vec![
        Turn::user(seed_instruction(&context.user_level, &context.focus_area)),
        Turn::assistant(SEED_ACKNOWLEDGMENT),
    ]
}

pub fn pronunciation_prompt(audio_transcript: &str) -> String {
    format!(
        "As an English tutor, analyze this speech: \"{audio_transcript}\"\n\
         Provide specific feedback on:\n\
         1. Pronunciation accuracy\n\
         2. Common mistakes\n\
         3. Improvement suggestions\n\
         Keep the response concise and encouraging."
    )
}

pub fn grammar_prompt(text: &str) -> String {
    format!(
        "As an English tutor, analyze this text: \"{text}\"\n\
         Provide feedback on:\n\
         1. Grammar accuracy\n\
         2. Sentence structure\n\
         3. Suggested improvements\n\
         Keep the response concise and encouraging."
    )
}
