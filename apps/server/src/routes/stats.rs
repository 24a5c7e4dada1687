//! Statistics endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/stats
pub async fn get(State(state): State<AppState>) -> Result<Json<StatsResponse>> {
    let drill = state.lock()?;
    Ok(Json(StatsResponse {
        totals: drill.engine.aggregates(),
        needs_practice: drill
            .engine
            .needs_practice()
            .into_iter()
            .map(PracticeEntry::from)
            .collect(),
    }))
}
