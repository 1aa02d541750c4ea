//! Free conversation with a persisted transcript.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::info;
use tutor_ai::{ChatBackend, ConversationContext, ConversationSession};
use tutor_common::TutorError;

use crate::store::prefs::{ChatLine, Speaker};
use crate::store::KeyValueStore;

use super::{next_utterance, prompt};

const CHAT_FOCUS: &str = "conversation";

/// Replay the saved transcript, then chat until EOF or `/quit`.
///
/// Every utterance counts toward the profile's completed lessons, and
/// the transcript is saved after each reply.
pub async fn run_chat<R, W>(
    backend: &dyn ChatBackend,
    store: &mut KeyValueStore,
    user_level: &str,
    input: R,
    out: &mut W,
) -> Result<(), TutorError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut transcript = store.transcript()?;
    for line in &transcript {
        print_line(out, line)?;
    }

    let mut session =
        ConversationSession::new(backend, ConversationContext::new(user_level, CHAT_FOCUS));
    let mut lines = input.lines();

    prompt(out)?;
    while let Some(message) = next_utterance(&mut lines).await? {
        transcript.push(ChatLine::user(message.clone()));
        if let Some(count) = store.record_lesson_completed()? {
            info!(lessons_completed = count, "Lesson recorded");
        }

        let reply = session.send_message(&message).await;
        let line = ChatLine::ai(reply);
        print_line(out, &line)?;
        transcript.push(line);
        store.set_transcript(&transcript)?;
        prompt(out)?;
    }
    writeln!(out)?;

    info!(
        calls = session.usage().call_count(),
        tokens = session.usage().total_tokens(),
        "Chat ended"
    );
    Ok(())
}

fn print_line<W: Write>(out: &mut W, line: &ChatLine) -> std::io::Result<()> {
    let who = match line.from {
        Speaker::Ai => "Tutor",
        Speaker::User => "You",
    };
    writeln!(out, "{who}: {}", line.text)
}
