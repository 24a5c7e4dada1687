//! Ephemeral state of a single quiz question.

use crate::matching::Evaluation;
use crate::types::{RecordId, VocabularyRecord};
use serde::Serialize;

/// One question being asked: the word shown, the typed answer and, once
/// submitted, the verdict. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSession {
    record_id: RecordId,
    word: String,
    times_wrong: u32,
    times_correct: u32,
    answer: String,
    outcome: Option<Evaluation>,
}

impl QuizSession {
    pub fn new(record: &VocabularyRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            word: record.word.clone(),
            times_wrong: record.times_wrong,
            times_correct: record.times_correct,
            answer: String::new(),
            outcome: None,
        }
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    /// The prompt shown to the user.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Counters of the record at the time the question was asked.
    pub fn history(&self) -> (u32, u32) {
        (self.times_wrong, self.times_correct)
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Replace the input buffer. Ignored once the question is answered.
    pub fn set_answer(&mut self, input: impl Into<String>) {
        if !self.is_resolved() {
            self.answer = input.into();
        }
    }

    /// Whether the current input may be submitted.
    pub fn can_submit(&self) -> bool {
        !self.is_resolved() && !self.answer.trim().is_empty()
    }

    pub fn outcome(&self) -> Option<&Evaluation> {
        self.outcome.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn resolve(&mut self, evaluation: Evaluation) {
        self.outcome = Some(evaluation);
    }
}
