//! Tutoring conversation sessions.
//!
//! A `ConversationSession` owns one seeded chat handle and turns every
//! request into a reply string, replacing remote failures with a fixed
//! fallback so callers never have to handle errors.

mod chat;
mod manager;

#[cfg(test)]
mod tests;

pub use manager::ConversationSession;
