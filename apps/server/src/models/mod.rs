//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Re-export shared types from vocab-core
pub use vocab_core::{
    Aggregates, AnswerOutcome, NewWord, QuizSession, RecordId, VocabularyRecord,
};

/// Response for GET /api/words
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordListResponse {
    pub words: Vec<VocabularyRecord>,
}

/// A question handed to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionResponse {
    pub session_id: Uuid,
    pub word_id: RecordId,
    pub word: String,
    pub times_wrong: u32,
    pub times_correct: u32,
}

impl QuizQuestionResponse {
    pub fn new(session_id: Uuid, session: &QuizSession) -> Self {
        let (times_wrong, times_correct) = session.history();
        Self {
            session_id,
            word_id: session.record_id().clone(),
            word: session.word().to_string(),
            times_wrong,
            times_correct,
        }
    }
}

/// Request for POST /api/quiz/answer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub session_id: Uuid,
    pub answer: String,
}

/// Verdict plus the correct answers to reveal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub correct: bool,
    pub answer: String,
    pub word_id: RecordId,
    pub word: String,
    pub translation: String,
    pub definition: String,
    pub times_wrong: u32,
    pub times_correct: u32,
    pub level: u8,
}

impl From<AnswerOutcome> for SubmitAnswerResponse {
    fn from(outcome: AnswerOutcome) -> Self {
        let record = outcome.record;
        Self {
            correct: outcome.evaluation.correct,
            answer: outcome.evaluation.answer_normalized,
            word_id: record.id,
            word: record.word,
            translation: record.translation,
            definition: record.definition,
            times_wrong: record.times_wrong,
            times_correct: record.times_correct,
            level: record.level.value(),
        }
    }
}

/// Entry of the needs-practice list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeEntry {
    pub id: RecordId,
    pub word: String,
    pub times_wrong: u32,
}

impl From<VocabularyRecord> for PracticeEntry {
    fn from(record: VocabularyRecord) -> Self {
        Self {
            id: record.id,
            word: record.word,
            times_wrong: record.times_wrong,
        }
    }
}

/// Response for GET /api/stats
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    #[serde(flatten)]
    pub totals: Aggregates,
    pub needs_practice: Vec<PracticeEntry>,
}
