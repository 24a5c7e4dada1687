//! Answer matching for quiz sessions.
//!
//! An answer is accepted when, after trimming and lower-casing, it contains or is
//! contained in either the translation or the definition. This is deliberately
//! lenient: a single letter such as "a" matches most definitions.

use crate::types::VocabularyRecord;
use serde::{Deserialize, Serialize};

/// Verdict on a typed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Whether the answer is considered correct.
    pub correct: bool,
    /// Normalized typed answer (for display).
    pub answer_normalized: String,
}

/// Grade `answer` against the record's translation and definition.
///
/// Empty answers are not special-cased here; an empty string is contained in
/// everything, so callers must refuse to submit one.
pub fn evaluate(record: &VocabularyRecord, answer: &str) -> Evaluation {
    let answer_normalized = normalize(answer);
    let correct = [&record.translation, &record.definition]
        .into_iter()
        .any(|reference| containment_match(&normalize(reference), &answer_normalized));

    Evaluation {
        correct,
        answer_normalized,
    }
}

/// True when either string contains the other.
pub fn containment_match(reference: &str, answer: &str) -> bool {
    reference.contains(answer) || answer.contains(reference)
}

/// Trim surrounding whitespace and lower-case.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
