//! Error-weighted selection of the next quiz word.
//!
//! Each record is drawn with probability proportional to `times_wrong + 1`, so a
//! word missed three times comes up four times as often as one never missed.
//! Correct answers and level do not affect the weight.

use crate::types::VocabularyRecord;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Pick the next record to quiz, or `None` when there is nothing to pick.
///
/// Sampling uses a cumulative-weight table with binary search, so each call is
/// independent of previous picks.
pub fn select_next<'a, R>(records: &'a [VocabularyRecord], rng: &mut R) -> Option<&'a VocabularyRecord>
where
    R: Rng + ?Sized,
{
    match records {
        [] => None,
        [only] => Some(only),
        _ => {
            let dist = match WeightedIndex::new(records.iter().map(VocabularyRecord::weight)) {
                Ok(dist) => dist,
                Err(err) => {
                    tracing::warn!(error = %err, "could not build selection weights");
                    return None;
                }
            };
            let picked = &records[dist.sample(rng)];
            tracing::debug!(id = %picked.id, weight = picked.weight(), "selected word");
            Some(picked)
        }
    }
}
