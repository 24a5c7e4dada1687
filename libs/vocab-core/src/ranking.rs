//! Derived views over the record set. Nothing here is cached.

use crate::types::{Level, VocabularyRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Number of records shown in the needs-practice list.
pub const NEEDS_PRACTICE_LIMIT: usize = 5;

/// Level from which a word counts as mastered.
pub const MASTERED_LEVEL: u8 = 4;

/// Records ordered hardest first by `times_wrong - times_correct`.
///
/// Equal scores keep their store order.
pub fn by_difficulty(records: &[VocabularyRecord]) -> Vec<VocabularyRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| Reverse(r.difficulty_score()));
    sorted
}

/// Up to five records answered wrong more often than right, most-missed first.
pub fn needs_practice(records: &[VocabularyRecord]) -> Vec<VocabularyRecord> {
    let mut struggling: Vec<VocabularyRecord> = records
        .iter()
        .filter(|r| r.times_wrong > r.times_correct)
        .cloned()
        .collect();
    struggling.sort_by_key(|r| Reverse(r.times_wrong));
    struggling.truncate(NEEDS_PRACTICE_LIMIT);
    struggling
}

/// Totals across the whole record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    pub total_words: usize,
    pub total_correct: u64,
    pub total_wrong: u64,
    pub mastered_count: usize,
}

impl Aggregates {
    pub fn collect(records: &[VocabularyRecord]) -> Self {
        let mastered = Level::new(MASTERED_LEVEL as i64);
        records.iter().fold(
            Self {
                total_words: records.len(),
                ..Self::default()
            },
            |mut acc, r| {
                acc.total_correct += r.times_correct as u64;
                acc.total_wrong += r.times_wrong as u64;
                if r.level >= mastered {
                    acc.mastered_count += 1;
                }
                acc
            },
        )
    }
}
