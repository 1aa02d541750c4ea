//! Typed accessors for the keys the tutor keeps in the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tutor_common::StoreError;

use super::KeyValueStore;

pub const CHAT_HISTORY_KEY: &str = "chatHistory";
pub const LANGUAGE_KEY: &str = "selectedLanguage";
pub const VOICE_KEY: &str = "selectedVoice";
pub const PROFILE_KEY: &str = "userProfile";

/// Display label and locale code for each supported practice language.
pub const SUPPORTED_LANGUAGES: [(&str, &str); 4] = [
    ("English", "en-US"),
    ("Spanish", "es-ES"),
    ("French", "fr-FR"),
    ("German", "de-DE"),
];

pub const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Ai,
    User,
}

/// One line of the chat transcript shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLine {
    pub from: Speaker,
    pub text: String,
}

impl ChatLine {
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            from: Speaker::Ai,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            from: Speaker::User,
            text: text.into(),
        }
    }
}

/// Transcript shown before the learner has chatted at all.
pub fn default_transcript() -> Vec<ChatLine> {
    vec![
        ChatLine::ai("Hi there! How can I help you today?"),
        ChatLine::user("I'd like to practice my English speaking skills."),
        ChatLine::ai("Great! Let's start with a simple conversation. What else do you like to do?"),
    ]
}

/// Text-to-speech voice preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Voice::Male => "male",
            Voice::Female => "female",
        })
    }
}

impl FromStr for Voice {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Voice::Male),
            "female" => Ok(Voice::Female),
            _ => Err(StoreError::InvalidValue {
                key: VOICE_KEY.into(),
                value: s.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub language: String,
    pub progress: f64,
    #[serde(default)]
    pub lessons_completed: u32,
}

impl UserProfile {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            language: DEFAULT_LANGUAGE.into(),
            progress: 0.0,
            lessons_completed: 0,
        }
    }
}

/// Label for a supported locale code, if any.
pub fn language_label(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(label, _)| *label)
}

impl KeyValueStore {
    pub fn transcript(&self) -> Result<Vec<ChatLine>, StoreError> {
        Ok(self
            .get(CHAT_HISTORY_KEY)?
            .unwrap_or_else(default_transcript))
    }

    pub fn set_transcript(&mut self, lines: &[ChatLine]) -> Result<(), StoreError> {
        self.set(CHAT_HISTORY_KEY, &lines)
    }

    pub fn clear_transcript(&mut self) -> Result<(), StoreError> {
        self.remove(CHAT_HISTORY_KEY)
    }

    pub fn language(&self) -> Result<String, StoreError> {
        Ok(self
            .get(LANGUAGE_KEY)?
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()))
    }

    /// Only the codes in [`SUPPORTED_LANGUAGES`] are accepted.
    pub fn set_language(&mut self, code: &str) -> Result<(), StoreError> {
        if language_label(code).is_none() {
            return Err(StoreError::InvalidValue {
                key: LANGUAGE_KEY.into(),
                value: code.into(),
            });
        }
        self.set(LANGUAGE_KEY, &code)
    }

    pub fn voice(&self) -> Result<Voice, StoreError> {
        Ok(self.get(VOICE_KEY)?.unwrap_or_default())
    }

    pub fn set_voice(&mut self, voice: Voice) -> Result<(), StoreError> {
        self.set(VOICE_KEY, &voice)
    }

    pub fn profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.get(PROFILE_KEY)
    }

    pub fn set_profile(&mut self, profile: &UserProfile) -> Result<(), StoreError> {
        self.set(PROFILE_KEY, profile)
    }

    /// Bump the profile's lesson counter. Without a profile this is a
    /// no-op and returns `None`.
    pub fn record_lesson_completed(&mut self) -> Result<Option<u32>, StoreError> {
        let Some(mut profile) = self.profile()? else {
            return Ok(None);
        };
        profile.lessons_completed = profile.lessons_completed.saturating_add(1);
        self.set_profile(&profile)?;
        Ok(Some(profile.lessons_completed))
    }
}
