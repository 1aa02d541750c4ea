//! Learner defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearnerConfig {
    /// Proficiency label handed to the tutor persona.
    pub level: String,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            level: "intermediate".into(),
        }
    }
}
