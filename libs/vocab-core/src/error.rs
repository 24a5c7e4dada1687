//! Error types for vocab-core.

use crate::types::{RecordId, WordField};
use thiserror::Error;

/// Rejection of an add-word request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(WordField),
}

/// Failure reported by a blob store backend.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Quiz flow errors surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("no words to quiz")]
    NoWords,

    #[error("no active quiz")]
    NoActiveQuiz,

    #[error("answer must not be empty")]
    EmptyAnswer,

    #[error("question already answered")]
    AlreadyAnswered,

    #[error("word {0} no longer exists")]
    WordRemoved(RecordId),
}
