//! SQLite-backed blob storage.

pub mod schema;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use vocab_core::{BlobStore, PersistenceError};

type Result<T> = std::result::Result<T, rusqlite::Error>;

/// Blob store keeping each key in one row of the `blobs` table.
pub struct SqliteBlobStore {
    conn: Connection,
}

impl SqliteBlobStore {
    /// Open database at path, creating it and its parent directory if necessary.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(error = %err, dir = %parent.display(), "could not create data directory");
            }
        }
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Open in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA)
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM blobs WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
    }

    fn write(&self, key: &str, blob: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO blobs (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, blob, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl BlobStore for SqliteBlobStore {
    fn load(&self, key: &str) -> std::result::Result<Option<String>, PersistenceError> {
        self.read(key)
            .map_err(|e| PersistenceError::Backend(e.to_string()))
    }

    fn save(&mut self, key: &str, blob: &str) -> std::result::Result<(), PersistenceError> {
        self.write(key, blob)
            .map_err(|e| PersistenceError::Backend(e.to_string()))
    }
}
