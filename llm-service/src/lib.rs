//! OpenAI-compatible completion client.
//!
//! One provider, one operation: a single non-streaming chat completion per
//! call, with decoding pinned near-deterministic (temperature 0, top_p 0.9).
//! Transport and API failures are never retried or masked here; they
//! propagate to the caller as [`LlmError`].

mod config;
mod error_handler;
mod open_ai_service;

pub use config::LlmModelConfig;
pub use error_handler::{ConfigError, LlmError};
pub use open_ai_service::OpenAiService;
