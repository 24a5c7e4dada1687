//! Quiz endpoints

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;
use vocab_core::QuizError;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::state::Drill;
use crate::AppState;

/// POST /api/quiz/start
pub async fn start(State(state): State<AppState>) -> Result<Json<QuizQuestionResponse>> {
    let mut drill = state.lock()?;
    ask(&mut drill, false)
}

/// POST /api/quiz/next
pub async fn next(State(state): State<AppState>) -> Result<Json<QuizQuestionResponse>> {
    let mut drill = state.lock()?;
    ask(&mut drill, true)
}

fn ask(drill: &mut Drill, follow_up: bool) -> Result<Json<QuizQuestionResponse>> {
    let session_id = Uuid::new_v4();
    let question = {
        let session = if follow_up {
            drill.engine.next_question()?
        } else {
            drill.engine.start_quiz()?
        };
        QuizQuestionResponse::new(session_id, session)
    };
    drill.session_id = Some(session_id);
    Ok(Json(question))
}

/// POST /api/quiz/answer
pub async fn answer(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAnswerRequest>,
) -> Result<Json<SubmitAnswerResponse>> {
    let mut drill = state.lock()?;

    if drill.engine.session().is_none() {
        return Err(QuizError::NoActiveQuiz.into());
    }
    if drill.session_id != Some(payload.session_id) {
        return Err(ApiError::Conflict(format!(
            "quiz session {} is no longer active",
            payload.session_id
        )));
    }

    let outcome = drill.engine.submit_answer(&payload.answer)?;
    Ok(Json(outcome.into()))
}

/// DELETE /api/quiz
pub async fn exit(State(state): State<AppState>) -> Result<StatusCode> {
    let mut drill = state.lock()?;
    drill.engine.exit_quiz();
    drill.session_id = None;
    Ok(StatusCode::NO_CONTENT)
}
