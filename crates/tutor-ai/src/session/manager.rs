//! Session struct and construction.

use tracing::debug;

use crate::context::ConversationContext;
use crate::prompts::seed_exchange;
use crate::token_tracker::TokenTracker;
use crate::{ChatBackend, ChatHandle};

/// A tutoring conversation bound to one remote chat.
pub struct ConversationSession {
    /// Owned copy of the context the session was seeded from.
    pub(super) context: ConversationContext,
    /// Remote chat; its turn history is not mirrored locally.
    pub(super) handle: Box<dyn ChatHandle>,
    pub(super) tracker: TokenTracker,
}

impl ConversationSession {
    /// Open a chat on `backend` seeded with the tutor persona for `context`.
    pub fn new(backend: &dyn ChatBackend, context: ConversationContext) -> Self {
        debug!(
            level = %context.user_level,
            focus = %context.focus_area,
            "Starting tutoring session"
        );
        let handle = backend.start_chat(seed_exchange(&context));
        Self {
            context,
            handle,
            tracker: TokenTracker::new(),
        }
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    /// Token usage of the successful calls made so far.
    pub fn usage(&self) -> &TokenTracker {
        &self.tracker
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("context", &self.context)
            .field("calls", &self.tracker.call_count())
            .finish_non_exhaustive()
    }
}
