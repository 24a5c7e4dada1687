//! Entry points for a presentation layer.
//!
//! [`VocabularyEngine`] owns the record store, the random source and at most
//! one active [`QuizSession`]. Every call runs to completion; callers that share
//! an engine across threads wrap it in a lock.

use crate::error::{QuizError, ValidationError};
use crate::matching::{evaluate, Evaluation};
use crate::progress::apply_grade;
use crate::ranking::{self, Aggregates};
use crate::selector::select_next;
use crate::session::QuizSession;
use crate::store::{BlobStore, RecordStore};
use crate::types::{NewWord, RecordId, VocabularyRecord};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Result of grading a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub evaluation: Evaluation,
    /// The record after progress was applied; carries the correct answers.
    pub record: VocabularyRecord,
}

pub struct VocabularyEngine<B, R = StdRng> {
    store: RecordStore<B>,
    rng: R,
    session: Option<QuizSession>,
}

impl<B: BlobStore> VocabularyEngine<B> {
    /// Open an engine over `backend` with an OS-seeded random source.
    pub fn new(backend: B) -> Self {
        Self::with_rng(backend, StdRng::from_os_rng())
    }
}

impl<B: BlobStore, R: Rng> VocabularyEngine<B, R> {
    pub fn with_rng(backend: B, rng: R) -> Self {
        Self {
            store: RecordStore::open(backend),
            rng,
            session: None,
        }
    }

    pub fn add_word(&mut self, request: &NewWord) -> Result<VocabularyRecord, ValidationError> {
        self.store.add(request)
    }

    /// Delete a word. Deleting the word being quizzed ends the quiz.
    pub fn delete_word(&mut self, id: &RecordId) -> Option<VocabularyRecord> {
        let removed = self.store.remove(id)?;
        if self.session.as_ref().map(QuizSession::record_id) == Some(id) {
            tracing::debug!(id = %id, "quizzed word deleted, ending quiz");
            self.session = None;
        }
        Some(removed)
    }

    /// Pick a word and open a new question, replacing any previous one.
    pub fn start_quiz(&mut self) -> Result<&QuizSession, QuizError> {
        let record = select_next(self.store.records(), &mut self.rng).ok_or(QuizError::NoWords)?;
        let session = QuizSession::new(record);
        Ok(&*self.session.insert(session))
    }

    /// Move on to another question once the current one is done.
    pub fn next_question(&mut self) -> Result<&QuizSession, QuizError> {
        self.start_quiz()
    }

    /// Grade `answer` against the active question and commit the progress.
    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerOutcome, QuizError> {
        let session = self.session.as_mut().ok_or(QuizError::NoActiveQuiz)?;
        if session.is_resolved() {
            return Err(QuizError::AlreadyAnswered);
        }
        session.set_answer(answer);
        if !session.can_submit() {
            return Err(QuizError::EmptyAnswer);
        }

        let id = session.record_id().clone();
        let record = self
            .store
            .get(&id)
            .ok_or_else(|| QuizError::WordRemoved(id.clone()))?;
        let evaluation = evaluate(record, answer);
        let updated = apply_grade(record, evaluation.correct, Utc::now());
        self.store.replace(&id, updated.clone());
        session.resolve(evaluation.clone());

        tracing::debug!(
            id = %id,
            correct = evaluation.correct,
            level = updated.level.value(),
            "graded answer"
        );

        Ok(AnswerOutcome {
            evaluation,
            record: updated,
        })
    }

    /// Discard the active question, if any.
    pub fn exit_quiz(&mut self) -> bool {
        self.session.take().is_some()
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Snapshot of all records in insertion order.
    pub fn words(&self) -> Vec<VocabularyRecord> {
        self.store.all()
    }

    pub fn words_by_difficulty(&self) -> Vec<VocabularyRecord> {
        ranking::by_difficulty(self.store.records())
    }

    pub fn needs_practice(&self) -> Vec<VocabularyRecord> {
        ranking::needs_practice(self.store.records())
    }

    pub fn aggregates(&self) -> Aggregates {
        Aggregates::collect(self.store.records())
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBlobStore;
    use crate::types::Level;
    use pretty_assertions::assert_eq;

    fn engine() -> VocabularyEngine<MemoryBlobStore> {
        VocabularyEngine::with_rng(MemoryBlobStore::new(), StdRng::seed_from_u64(3))
    }

    fn cat() -> NewWord {
        NewWord::new("cat", "a small domesticated feline", "חתול")
    }

    #[test]
    fn test_quiz_on_empty_store_is_refused() {
        let mut engine = engine();
        assert_eq!(engine.start_quiz().err(), Some(QuizError::NoWords));
        assert!(engine.session().is_none());
    }

    #[test]
    fn test_correct_answer_raises_level() {
        let mut engine = engine();
        let record = engine.add_word(&cat()).unwrap();

        let session = engine.start_quiz().unwrap();
        assert_eq!(session.record_id(), &record.id);
        assert_eq!(session.word(), "cat");

        let outcome = engine.submit_answer("חתול").unwrap();
        assert!(outcome.evaluation.correct);
        assert_eq!(outcome.record.times_correct, 1);
        assert_eq!(outcome.record.level.value(), 2);
        assert_eq!(engine.words(), vec![outcome.record]);
    }

    #[test]
    fn test_wrong_answer_counts_and_keeps_level_floor() {
        let mut engine = engine();
        engine.add_word(&cat()).unwrap();
        engine.start_quiz().unwrap();

        let outcome = engine.submit_answer("dog").unwrap();
        assert!(!outcome.evaluation.correct);
        assert_eq!(outcome.record.times_wrong, 1);
        assert_eq!(outcome.record.level, Level::MIN);
        assert_eq!(outcome.record.translation, "חתול");
    }

    #[test]
    fn test_answer_requires_active_unresolved_question() {
        let mut engine = engine();
        engine.add_word(&cat()).unwrap();
        assert_eq!(engine.submit_answer("חתול"), Err(QuizError::NoActiveQuiz));

        engine.start_quiz().unwrap();
        assert_eq!(engine.submit_answer("  "), Err(QuizError::EmptyAnswer));
        engine.submit_answer("חתול").unwrap();
        assert_eq!(engine.submit_answer("חתול"), Err(QuizError::AlreadyAnswered));
        assert_eq!(engine.words()[0].times_correct, 1);
    }

    #[test]
    fn test_next_question_opens_fresh_session() {
        let mut engine = engine();
        engine.add_word(&cat()).unwrap();
        engine.start_quiz().unwrap();
        engine.submit_answer("dog").unwrap();

        let session = engine.next_question().unwrap();
        assert!(!session.is_resolved());
        assert_eq!(session.history(), (1, 0));
    }

    #[test]
    fn test_exit_discards_session() {
        let mut engine = engine();
        engine.add_word(&cat()).unwrap();
        engine.start_quiz().unwrap();

        assert!(engine.exit_quiz());
        assert!(engine.session().is_none());
        assert!(!engine.exit_quiz());
    }

    #[test]
    fn test_deleting_quizzed_word_ends_quiz() {
        let mut engine = engine();
        let record = engine.add_word(&cat()).unwrap();
        engine.start_quiz().unwrap();

        assert!(engine.delete_word(&record.id).is_some());
        assert!(engine.session().is_none());
        assert!(engine.delete_word(&record.id).is_none());
    }

    #[test]
    fn test_quiz_runs_over_text_ids() {
        let blob = r#"[{"id": "w-1", "word": "cat", "definition": "feline", "translation": "חתול",
            "timesWrong": 0, "timesCorrect": 0, "lastSeen": "2024-03-01T10:00:00Z", "level": 1}]"#;
        let backend = MemoryBlobStore::with_blob(crate::store::STORAGE_KEY, blob);
        let mut engine = VocabularyEngine::with_rng(backend, StdRng::seed_from_u64(3));

        let session = engine.start_quiz().unwrap();
        assert_eq!(session.record_id(), &RecordId::from("w-1"));

        let outcome = engine.submit_answer("חתול").unwrap();
        assert_eq!(outcome.record.id, RecordId::from("w-1"));
        assert_eq!(engine.words()[0].times_correct, 1);

        engine.start_quiz().unwrap();
        assert!(engine.delete_word(&RecordId::from("w-1")).is_some());
        assert!(engine.session().is_none());
    }

    #[test]
    fn test_views_reflect_graded_answers() {
        let mut engine = engine();
        engine.add_word(&cat()).unwrap();
        engine.start_quiz().unwrap();
        engine.submit_answer("dog").unwrap();

        let stats = engine.aggregates();
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.total_wrong, 1);
        assert_eq!(engine.needs_practice().len(), 1);
        assert_eq!(engine.words_by_difficulty()[0].word, "cat");
    }
}
