//! Level and counter updates after a graded attempt.

use crate::types::VocabularyRecord;
use chrono::{DateTime, Utc};

/// Apply a verdict to a record, returning the replacement value.
///
/// A correct answer bumps `times_correct` and raises the level by one; a wrong
/// answer bumps `times_wrong` and lowers it by one. Levels saturate at 1 and 5.
pub fn apply_grade(record: &VocabularyRecord, correct: bool, now: DateTime<Utc>) -> VocabularyRecord {
    let (times_correct, times_wrong, level) = if correct {
        (record.times_correct.saturating_add(1), record.times_wrong, record.level.raise())
    } else {
        (record.times_correct, record.times_wrong.saturating_add(1), record.level.lower())
    };

    VocabularyRecord {
        times_correct,
        times_wrong,
        level,
        last_seen: now,
        ..record.clone()
    }
}
