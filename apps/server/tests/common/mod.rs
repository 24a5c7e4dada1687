//! Common test utilities and fixtures for integration tests.
//!
//! Every context runs against its own in-memory SQLite blob store, so tests
//! need no external services.

pub mod fixtures;

use axum_test::TestServer;
use serde_json::Value;

use vocab_core::{BlobStore, STORAGE_KEY};
use vocab_drill_server::db::SqliteBlobStore;
use vocab_drill_server::{build_router, AppState};

/// Test context wrapping a server over a fresh store.
pub struct TestContext {
    pub server: TestServer,
}

impl TestContext {
    /// Create a new test context with an empty vocabulary.
    pub fn new() -> Self {
        let store = SqliteBlobStore::open_in_memory().expect("Failed to open in-memory database");
        Self::with_store(store)
    }

    /// Create a context whose store already holds `blob` under the vocabulary key.
    pub fn with_saved_words(blob: &str) -> Self {
        let mut store =
            SqliteBlobStore::open_in_memory().expect("Failed to open in-memory database");
        store.save(STORAGE_KEY, blob).expect("Failed to seed vocabulary");
        Self::with_store(store)
    }

    fn with_store(store: SqliteBlobStore) -> Self {
        let app = build_router(AppState::new(store));
        let server = TestServer::new(app).expect("Failed to start test server");
        Self { server }
    }

    /// Add a word through the API and return the created record.
    pub async fn add_word(&self, word: &str, definition: &str, translation: &str) -> Value {
        let response = self
            .server
            .post("/api/words")
            .json(&fixtures::add_word_request(word, definition, translation))
            .await;
        response.assert_status(axum::http::StatusCode::CREATED);
        response.json()
    }

    /// Start a quiz and return the question body.
    pub async fn start_quiz(&self) -> Value {
        let response = self.server.post("/api/quiz/start").await;
        response.assert_status_ok();
        response.json()
    }

    /// Answer the question identified by `session_id`.
    pub async fn answer(&self, session_id: &Value, answer: &str) -> axum_test::TestResponse {
        self.server
            .post("/api/quiz/answer")
            .json(&fixtures::answer_request(session_id, answer))
            .await
    }
}
