//! Token usage tracking for a tutoring session.

use std::collections::HashMap;
use std::fmt;

use crate::TokenUsage;

/// The shape of request a session sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Message,
    Pronunciation,
    Grammar,
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PromptKind::Message => "message",
            PromptKind::Pronunciation => "pronunciation",
            PromptKind::Grammar => "grammar",
        })
    }
}

/// Tracks cumulative token usage, overall and per prompt kind.
#[derive(Debug, Clone, Default)]
pub struct TokenTracker {
    total: TokenUsage,
    by_kind: HashMap<PromptKind, TokenUsage>,
    /// Successful calls only; fallbacks are not counted.
    call_count: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: PromptKind, usage: &TokenUsage) {
        self.total.input_tokens += usage.input_tokens;
        self.total.output_tokens += usage.output_tokens;
        self.call_count += 1;

        let entry = self.by_kind.entry(kind).or_default();
        entry.input_tokens += usage.input_tokens;
        entry.output_tokens += usage.output_tokens;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_kind(&self, kind: PromptKind) -> Option<&TokenUsage> {
        self.by_kind.get(&kind)
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}
