//! HTTP API for the policy question-answering service.
//!
//! One POST route that takes a natural-language question and replies with
//! the extracted model answer, plus a liveness probe. CORS is deliberately
//! permissive: the endpoint is called straight from browser widgets on
//! arbitrary origins.

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::AppState;
pub use error_handler::{AppError, AppResult};

use std::{env, sync::Arc};

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::routes::{
    answer::answer_question_route::answer_question, health_route::health,
};

/// Builds the router with all routes, shared state, and the CORS layer
/// (any origin, POST/OPTIONS, Content-Type header).
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/answer_question", post(answer_question))
        .layer(cors)
        .with_state(state)
}

/// Starts the HTTP server and runs until ctrl-c.
pub async fn start() -> AppResult<()> {
    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".into());
    let state = Arc::new(AppState::from_env()?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "policy QA API listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to listen for shutdown signal");
}
