//! Record store and the blob persistence seam.
//!
//! The whole collection is written under a single key after every mutation and
//! read once when the store is opened. Persistence is best effort: failures are
//! logged and the in-memory state stays authoritative.

use crate::error::{PersistenceError, ValidationError};
use crate::types::{NewWord, RecordId, VocabularyRecord};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

/// Key under which the record collection is stored.
pub const STORAGE_KEY: &str = "vocabularyWords";

/// Key holding the last blob that could not be fully read.
pub const BACKUP_KEY: &str = "vocabularyWords.unreadable";

/// Key-value blob storage.
pub trait BlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;
    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError>;
}

/// In-memory blob store.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    failing: bool,
    saves: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a blob under `key`.
    pub fn with_blob(key: &str, blob: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.to_string(), blob.into());
        store
    }

    /// Make every subsequent load and save fail.
    pub fn set_failing(&mut self, failing: bool) {
        self.failing = failing;
    }

    /// Raw blob currently held under `key`.
    pub fn blob(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.failing {
            return Err(PersistenceError::Backend("memory store unavailable".to_string()));
        }
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        if self.failing {
            return Err(PersistenceError::Backend("memory store unavailable".to_string()));
        }
        self.blobs.insert(key.to_string(), blob.to_string());
        self.saves += 1;
        Ok(())
    }
}

/// Serialize records to their wire form (a JSON array).
pub fn encode_records(records: &[VocabularyRecord]) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string(records)?)
}

/// Parse records from their wire form.
pub fn decode_records(blob: &str) -> Result<Vec<VocabularyRecord>, PersistenceError> {
    Ok(serde_json::from_str(blob)?)
}

/// Parse records one by one, skipping the ones that do not decode.
///
/// Returns the readable records and the number skipped. Fails only when the
/// blob is not a JSON array at all.
fn decode_tolerant(blob: &str) -> Result<(Vec<VocabularyRecord>, usize), PersistenceError> {
    let entries: Vec<serde_json::Value> = serde_json::from_str(blob)?;
    let mut skipped = 0;
    let records = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping unreadable vocabulary record");
                skipped += 1;
                None
            }
        })
        .collect();
    Ok((records, skipped))
}

/// Ordered, owned collection of vocabulary records.
pub struct RecordStore<B> {
    backend: B,
    records: Vec<VocabularyRecord>,
    last_id: i64,
}

impl<B: BlobStore> RecordStore<B> {
    /// Open the store, loading whatever the backend holds.
    ///
    /// A missing or unreadable blob yields an empty store. Whenever anything
    /// had to be dropped, the original blob is copied to [`BACKUP_KEY`] first so
    /// the next save cannot destroy it.
    pub fn open(backend: B) -> Self {
        let mut backend = backend;
        let records = match backend.load(STORAGE_KEY) {
            Ok(Some(blob)) => match decode_tolerant(&blob) {
                Ok((records, 0)) => dedupe(records),
                Ok((records, _)) => {
                    back_up(&mut backend, &blob);
                    dedupe(records)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "discarding unreadable vocabulary blob");
                    back_up(&mut backend, &blob);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to load vocabulary, starting empty");
                Vec::new()
            }
        };
        let last_id = records
            .iter()
            .filter_map(|r| r.id.as_int())
            .max()
            .unwrap_or(0);
        tracing::debug!(count = records.len(), "opened record store");

        Self {
            backend,
            records,
            last_id,
        }
    }

    /// Validate and append a new record.
    pub fn add(&mut self, request: &NewWord) -> Result<VocabularyRecord, ValidationError> {
        self.add_at(request, Utc::now())
    }

    /// Like [`add`](Self::add) with an explicit creation time.
    pub fn add_at(
        &mut self,
        request: &NewWord,
        now: DateTime<Utc>,
    ) -> Result<VocabularyRecord, ValidationError> {
        let fields = request.validate()?;
        let id = self.next_id(now);
        let record = VocabularyRecord::new(id, fields, now);
        self.records.push(record.clone());
        tracing::info!(id, word = %record.word, "added word");
        self.persist();
        Ok(record)
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &RecordId) -> Option<VocabularyRecord> {
        let index = self.records.iter().position(|r| &r.id == id)?;
        let removed = self.records.remove(index);
        tracing::info!(id = %id, word = %removed.word, "deleted word");
        self.persist();
        Some(removed)
    }

    /// Swap the record with `id` for `updated`. Unknown ids are ignored.
    ///
    /// The stored record always keeps `id`, whatever `updated.id` says.
    pub fn replace(&mut self, id: &RecordId, updated: VocabularyRecord) -> bool {
        let Some(slot) = self.records.iter_mut().find(|r| &r.id == id) else {
            return false;
        };
        *slot = VocabularyRecord {
            id: id.clone(),
            ..updated
        };
        self.persist();
        true
    }

    /// Snapshot of every record in insertion order.
    pub fn all(&self) -> Vec<VocabularyRecord> {
        self.records.clone()
    }

    /// Borrowed view of the records in insertion order.
    pub fn records(&self) -> &[VocabularyRecord] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&VocabularyRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Look a record up by the textual form of its id, as found in a URL.
    pub fn find_by_key(&self, key: &str) -> Option<&VocabularyRecord> {
        self.records
            .iter()
            .find(|r| matches!(&r.id, RecordId::Int(_)) && r.id.to_string() == key)
            .or_else(|| self.records.iter().find(|r| r.id.to_string() == key))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Creation time in milliseconds, moved past every integer id seen so far.
    fn next_id(&mut self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis();
        match self.last_id.checked_add(1) {
            Some(next) => {
                let id = millis.max(next);
                self.last_id = id;
                id
            }
            None => {
                tracing::warn!("integer ids exhausted, searching for a free one");
                self.first_free_id(millis)
            }
        }
    }

    fn first_free_id(&self, from: i64) -> i64 {
        let taken: HashSet<i64> = self.records.iter().filter_map(|r| r.id.as_int()).collect();
        let mut id = from;
        while taken.contains(&id) {
            id = id.wrapping_add(1);
        }
        id
    }

    fn persist(&mut self) {
        let result = encode_records(&self.records)
            .and_then(|blob| self.backend.save(STORAGE_KEY, &blob));
        if let Err(err) = result {
            tracing::warn!(error = %err, count = self.records.len(), "failed to persist vocabulary");
        }
    }
}

fn back_up<B: BlobStore>(backend: &mut B, blob: &str) {
    match backend.save(BACKUP_KEY, blob) {
        Ok(()) => tracing::warn!(key = BACKUP_KEY, "kept a copy of the unreadable vocabulary blob"),
        Err(err) => tracing::warn!(error = %err, "failed to back up unreadable vocabulary blob"),
    }
}

/// Keep the first occurrence of each id.
fn dedupe(records: Vec<VocabularyRecord>) -> Vec<VocabularyRecord> {
    let mut seen = HashSet::new();
    let before = records.len();
    let unique: Vec<_> = records.into_iter().filter(|r| seen.insert(r.id.clone())).collect();
    if unique.len() != before {
        tracing::warn!(dropped = before - unique.len(), "dropped records with duplicate ids");
    }
    unique
}
