//! Request bodies for integration tests.

use serde_json::{json, Value};

pub const CAT_WORD: &str = "cat";
pub const CAT_DEFINITION: &str = "a small domesticated feline";
pub const CAT_TRANSLATION: &str = "חתול";

/// Body for POST /api/words.
pub fn add_word_request(word: &str, definition: &str, translation: &str) -> Value {
    json!({
        "word": word,
        "definition": definition,
        "translation": translation,
    })
}

/// Body for POST /api/quiz/answer.
pub fn answer_request(session_id: &Value, answer: &str) -> Value {
    json!({
        "sessionId": session_id,
        "answer": answer,
    })
}
