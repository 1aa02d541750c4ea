//! Configuration schema types for the tutor.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod ai;
mod learner;
mod speech;
mod system;

pub use ai::*;
pub use learner::*;
pub use speech::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct TutorConfig {
    pub ai: AiConfig,
    pub learner: LearnerConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingConfig,
}
