use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tutor_ai::LessonKind;

/// Tutor: practice English with a conversational AI tutor.
#[derive(Parser, Debug)]
#[command(name = "tutor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the local store (transcript, preferences, profile).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Learner level override (e.g. beginner, intermediate, advanced).
    #[arg(long)]
    pub level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Free conversation with the tutor; the transcript is kept between runs.
    Chat,
    /// Focused practice: conversation, pronunciation, or grammar.
    Lesson {
        kind: LessonKind,
        /// Transcribe this recording and get feedback on it instead of typing.
        #[arg(long)]
        audio: Option<PathBuf>,
    },
    /// Show or change the practice language and voice.
    Settings {
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        voice: Option<String>,
    },
    /// Show, create, or update the learner profile.
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    /// Forget the saved chat transcript.
    Reset,
    /// Print the effective configuration, optionally saving a new learner level.
    Config {
        #[arg(long)]
        save_level: Option<String>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
