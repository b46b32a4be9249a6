use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use qa_engine::QaError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Llm(#[from] llm_service::LlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / answering ---
    #[error("invalid request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Qa(#[from] QaError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            // startup-only
            AppError::MissingEnv(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Llm(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // 4xx
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,

            // answering pipeline
            AppError::Qa(e) => match e {
                QaError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
                QaError::Completion(_) | QaError::MalformedReply { .. } => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Llm(_) => "LLM_CONFIG_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Qa(e) => match e {
                QaError::Store(_) => "STORE_ERROR",
                QaError::Completion(_) => "UPSTREAM_LLM_ERROR",
                QaError::MalformedReply { .. } => "MALFORMED_REPLY",
            },
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.error_code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Convert Axum body rejections to `AppError`.
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(err: axum::extract::rejection::JsonRejection) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
