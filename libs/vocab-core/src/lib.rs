//! Adaptive recall engine for a personal vocabulary drill.
//!
//! Provides:
//! - Vocabulary records and their wire format
//! - A record store synchronized to a key-value blob backend
//! - Error-weighted selection of the next quiz word
//! - Containment-based answer matching
//! - Level/counter updates and derived ranking views

pub mod engine;
pub mod error;
pub mod matching;
pub mod progress;
pub mod ranking;
pub mod selector;
pub mod session;
pub mod store;
pub mod types;

pub use engine::{AnswerOutcome, VocabularyEngine};
pub use error::{PersistenceError, QuizError, ValidationError};
pub use matching::{containment_match, evaluate, normalize, Evaluation};
pub use progress::apply_grade;
pub use ranking::{by_difficulty, needs_practice, Aggregates, MASTERED_LEVEL, NEEDS_PRACTICE_LIMIT};
pub use selector::select_next;
pub use session::QuizSession;
pub use store::{
    decode_records, encode_records, BlobStore, MemoryBlobStore, RecordStore, BACKUP_KEY, STORAGE_KEY,
};
pub use types::{Level, NewWord, RecordId, VocabularyRecord, WordField};
