use std::collections::HashMap;

use crate::model::{OptionKey, QuestionId};

/// The user's selections for one session, keyed by question.
///
/// Holds at most one entry per question; recording again replaces the earlier
/// pick. There is no removal, so the record only grows during a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerRecord {
    picks: HashMap<QuestionId, OptionKey>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous pick for this question, if any.
    pub fn record(&mut self, id: QuestionId, key: OptionKey) -> Option<OptionKey> {
        self.picks.insert(id, key)
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<OptionKey> {
        self.picks.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
