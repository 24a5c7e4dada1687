//! Application state.

use std::sync::{Arc, Mutex, MutexGuard};

use uuid::Uuid;
use vocab_core::VocabularyEngine;

use crate::db::SqliteBlobStore;
use crate::error::{ApiError, Result};

/// The engine plus the token of the question currently handed out.
pub struct Drill {
    pub engine: VocabularyEngine<SqliteBlobStore>,
    pub session_id: Option<Uuid>,
}

impl Drill {
    /// Forget the token once the engine has no active question.
    pub fn sync_session(&mut self) {
        if self.engine.session().is_none() {
            self.session_id = None;
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    drill: Arc<Mutex<Drill>>,
}

impl AppState {
    pub fn new(store: SqliteBlobStore) -> Self {
        Self {
            drill: Arc::new(Mutex::new(Drill {
                engine: VocabularyEngine::new(store),
                session_id: None,
            })),
        }
    }

    /// Lock the drill for the duration of one request.
    pub fn lock(&self) -> Result<MutexGuard<'_, Drill>> {
        self.drill
            .lock()
            .map_err(|_| ApiError::Internal("drill state lock poisoned".to_string()))
    }
}
