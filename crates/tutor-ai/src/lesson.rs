//! Lesson kinds and how each one is routed to the tutor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The practice mode a lesson runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    #[default]
    Conversation,
    Pronunciation,
    Grammar,
}

impl LessonKind {
    pub const ALL: [LessonKind; 3] = [
        LessonKind::Conversation,
        LessonKind::Pronunciation,
        LessonKind::Grammar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LessonKind::Conversation => "conversation",
            LessonKind::Pronunciation => "pronunciation",
            LessonKind::Grammar => "grammar",
        }
    }

    /// Focus area label used when seeding a session for this lesson.
    pub fn focus_area(&self) -> &'static str {
        self.as_str()
    }

    /// Heading shown at the top of a lesson ("Grammar Practice").
    pub fn title(&self) -> String {
        let label = self.as_str();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => format!("{}{} Practice", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lesson kind '{0}' (expected conversation, pronunciation, or grammar)")]
pub struct UnknownLessonKind(pub String);

impl FromStr for LessonKind {
    type Err = UnknownLessonKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        LessonKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| UnknownLessonKind(s.to_string()))
    }
}
