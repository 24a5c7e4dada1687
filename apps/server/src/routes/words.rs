//! Word list endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/words
/// Words ordered hardest first
pub async fn list(State(state): State<AppState>) -> Result<Json<WordListResponse>> {
    let drill = state.lock()?;
    Ok(Json(WordListResponse {
        words: drill.engine.words_by_difficulty(),
    }))
}

/// GET /api/words/:id
pub async fn get(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<VocabularyRecord>> {
    let drill = state.lock()?;
    let record = drill
        .engine
        .store()
        .find_by_key(&key)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("word {}", key)))?;
    Ok(Json(record))
}

/// POST /api/words
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewWord>,
) -> Result<(StatusCode, Json<VocabularyRecord>)> {
    let mut drill = state.lock()?;
    let record = drill.engine.add_word(&payload)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// DELETE /api/words/:id
/// Unknown ids are accepted so deletes can be repeated.
pub async fn delete(State(state): State<AppState>, Path(key): Path<String>) -> Result<StatusCode> {
    let mut drill = state.lock()?;
    let id = drill.engine.store().find_by_key(&key).map(|r| r.id.clone());
    if let Some(id) = id {
        drill.engine.delete_word(&id);
        drill.sync_session();
    }
    Ok(StatusCode::NO_CONTENT)
}
