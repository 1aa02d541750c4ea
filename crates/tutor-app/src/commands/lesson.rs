//! Focused lessons: a fresh session per lesson kind.

use std::io::Write;
use std::path::Path;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};
use tutor_ai::{ChatBackend, ConversationContext, ConversationSession, LessonKind, SpeechToText};
use tutor_common::TutorError;

use super::{next_utterance, prompt};

const SPEECH_FAILED: &str = "Speech recognition failed. Please try again.";

fn lesson_session(
    backend: &dyn ChatBackend,
    user_level: &str,
    kind: LessonKind,
) -> ConversationSession {
    ConversationSession::new(
        backend,
        ConversationContext::new(user_level, kind.focus_area()),
    )
}

/// Interactive lesson: each line is routed by `kind` until EOF or `/quit`.
pub async fn run_lesson<R, W>(
    backend: &dyn ChatBackend,
    user_level: &str,
    kind: LessonKind,
    input: R,
    out: &mut W,
) -> Result<(), TutorError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = lesson_session(backend, user_level, kind);
    let mut lines = input.lines();

    writeln!(out, "{}", kind.title())?;
    prompt(out)?;
    while let Some(utterance) = next_utterance(&mut lines).await? {
        let reply = session.respond(kind, &utterance).await;
        writeln!(out, "Tutor: {reply}")?;
        prompt(out)?;
    }
    writeln!(out)?;

    let usage = session.usage();
    info!(
        %kind,
        calls = usage.call_count(),
        input_tokens = usage.total().input_tokens,
        output_tokens = usage.total().output_tokens,
        "Lesson ended"
    );
    Ok(())
}

/// One-shot lesson on a recording: transcribe, then ask for feedback.
pub async fn run_audio_lesson<W: Write>(
    backend: &dyn ChatBackend,
    stt: &dyn SpeechToText,
    user_level: &str,
    kind: LessonKind,
    audio: &Path,
    out: &mut W,
) -> Result<(), TutorError> {
    let data = tokio::fs::read(audio).await?;
    let filename = audio
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "audio.wav".to_string());

    writeln!(out, "{}", kind.title())?;

    let transcript = match stt.transcribe(data, &filename).await {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            warn!(file = %audio.display(), "Transcription was empty");
            writeln!(out, "{SPEECH_FAILED}")?;
            return Ok(());
        }
        Err(e) => {
            warn!(file = %audio.display(), "Transcription failed: {e}");
            writeln!(out, "{SPEECH_FAILED}")?;
            return Ok(());
        }
    };

    writeln!(out, "You: {transcript}")?;
    let mut session = lesson_session(backend, user_level, kind);
    let reply = session.respond(kind, &transcript).await;
    writeln!(out, "Tutor: {reply}")?;
    Ok(())
}
