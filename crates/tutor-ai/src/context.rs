//! Learner context used to seed a tutoring conversation.

use serde::{Deserialize, Serialize};

/// Parameters of a tutoring session, fixed once the session is built.
///
/// `previous_exchanges` is carried along in order but not sent to the
/// model; see [`crate::prompts::seed_exchange`] for what is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationContext {
    pub user_level: String,
    pub focus_area: String,
    #[serde(default)]
    pub previous_exchanges: Vec<String>,
}

impl ConversationContext {
    pub fn new(user_level: impl Into<String>, focus_area: impl Into<String>) -> Self {
        Self {
            user_level: user_level.into(),
            focus_area: focus_area.into(),
            previous_exchanges: Vec::new(),
        }
    }

    pub fn with_previous_exchanges(mut self, exchanges: Vec<String>) -> Self {
        self.previous_exchanges = exchanges;
        self
    }
}
