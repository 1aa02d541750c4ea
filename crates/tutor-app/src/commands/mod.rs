//! Subcommand implementations.
//!
//! Each command reads learner input from an async line source and
//! writes to a plain `Write`, so tests can drive them in memory.

mod chat;
mod lesson;
mod settings;


pub use chat::run_chat;
pub use lesson::{run_audio_lesson, run_lesson};
pub use settings::{run_config, run_profile, run_reset, run_settings};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

/// Typed at the prompt to leave an interactive loop.
const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

/// Next learner utterance, skipping blank lines. `None` on EOF or quit.
async fn next_utterance<R: AsyncBufRead + Unpin>(
    lines: &mut Lines<R>,
) -> std::io::Result<Option<String>> {
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if QUIT_COMMANDS.contains(&trimmed) {
            return Ok(None);
        }
        return Ok(Some(line));
    }
    Ok(None)
}

fn prompt<W: std::io::Write>(out: &mut W) -> std::io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
