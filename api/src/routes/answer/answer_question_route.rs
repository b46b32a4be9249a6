//! POST /answer_question — answers a policy question from stored documents.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::Value;
use tracing::info;

use qa_engine::QaOptions;

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    routes::answer::answer_request::{AnswerResponse, resolve_question},
};

/// Handler: POST /answer_question
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/answer_question \
///   -H 'content-type: application/json' \
///   -d '{"question":"Is outpatient surgery covered?"}'
/// ```
pub async fn answer_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnswerResponse>, AppError> {
    let Json(payload) = payload?;
    let question = resolve_question(payload)?;
    info!(question_len = question.len(), "answering question");

    let opts = QaOptions {
        prompt_preview_len: state.prompt_preview_len,
    };
    let answer = qa_engine::answer_question_with_opts(
        state.store.as_ref(),
        state.completion.as_ref(),
        &question,
        opts,
    )
    .await?;

    Ok(Json(AnswerResponse { question, answer }))
}
