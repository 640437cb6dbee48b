//! Input state of the news search box.
//!
//! The box holds two values: what the user is typing and the committed query
//! that was last fetched. Typing schedules a debounce timer identified by a
//! generation token; any later keystroke bumps the generation, so an older
//! timer that still fires is ignored. A commit returns the new query exactly
//! when it differs from the committed one, and each returned query is one fetch.

use crate::model::news::DEFAULT_QUERY;

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Quiet period after the last keystroke before the query is committed.
pub const DEBOUNCE_MS: u32 = 600;

/// How long the "Copied!" state stays on a card.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsSearch {
    input: String,
    query: String,
    generation: u64,
}

impl Default for NewsSearch {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY)
    }
}

impl NewsSearch {
    pub fn new(initial: &str) -> Self {
        Self {
            input: initial.to_string(),
            query: initial.to_string(),
            generation: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The query whose results are (or are being) shown.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Records a keystroke and cancels any pending timer.
    ///
    /// Returns the token for a new debounce timer, or `None` when the trimmed
    /// input already equals the committed query and nothing needs scheduling.
    pub fn set_input(&mut self, value: String) -> Option<u64> {
        self.input = value;
        self.generation += 1;
        (self.input.trim() != self.query).then_some(self.generation)
    }

    /// Called when the timer for `token` fires.
    ///
    /// Commits the trimmed input if the timer is still the latest one, the
    /// input is non-empty, and it differs from the committed query.
    pub fn debounce_elapsed(&mut self, token: u64) -> Option<String> {
        if token != self.generation {
            return None;
        }
        self.commit_input()
    }

    /// Explicit form submission; commits immediately.
    pub fn submit(&mut self) -> Option<String> {
        self.commit_input()
    }

    /// A suggested-query chip: sets both the input and the query.
    pub fn choose(&mut self, suggestion: &str) -> Option<String> {
        self.input = suggestion.to_string();
        self.generation += 1;
        self.commit(suggestion.trim())
    }

    fn commit_input(&mut self) -> Option<String> {
        let trimmed = self.input.trim().to_string();
        self.commit(&trimmed)
    }

    fn commit(&mut self, candidate: &str) -> Option<String> {
        if candidate.is_empty() || candidate == self.query {
            return None;
        }
        self.query = candidate.to_string();
        Some(self.query.clone())
    }
}

/// "Copied!" indicator for news cards.
///
/// Keyed by the headline text rather than the card, so cards sharing a title
/// light up together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyFeedback {
    copied: Option<String>,
    generation: u64,
}

impl CopyFeedback {
    /// Marks `text` as copied; returns the token for its expiry timer.
    pub fn copied(&mut self, text: String) -> u64 {
        self.copied = Some(text);
        self.generation += 1;
        self.generation
    }

    /// Clears the indicator unless a newer copy happened since `token`.
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation || self.copied.is_none() {
            return false;
        }
        self.copied = None;
        true
    }

    pub fn is_copied(&self, text: &str) -> bool {
        self.copied.as_deref() == Some(text)
    }
}
