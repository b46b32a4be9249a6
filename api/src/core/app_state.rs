use std::sync::Arc;

use llm_service::{LlmModelConfig, OpenAiService};
use policy_store::{DocumentStore, FsDocumentStore};
use qa_engine::CompletionClient;

use crate::error_handler::AppError;

/// Shared state for all HTTP handlers.
///
/// Built once at startup and cloned into every request via axum state, so
/// handlers never read the environment themselves. Both collaborators sit
/// behind trait objects so tests can swap in mocks.
#[derive(Clone)]
pub struct AppState {
    /// Read-only store of parsed policy documents.
    pub store: Arc<dyn DocumentStore>,
    /// Completion backend answering the built prompts.
    pub completion: Arc<dyn CompletionClient>,
    /// Prompt-preview clamp for debug logs; 0 disables the preview.
    pub prompt_preview_len: usize,
}

impl AppState {
    /// Loads shared state from environment variables.
    ///
    /// # Env
    /// - `PARSED_DOCS_DIR`    — store root directory (required)
    /// - `PROMPT_PREVIEW_LEN` — optional, defaults to 0 (disabled)
    /// - plus the `llm-service` variables read by
    ///   [`LlmModelConfig::from_env`]
    pub fn from_env() -> Result<Self, AppError> {
        let store_root = std::env::var("PARSED_DOCS_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(AppError::MissingEnv("PARSED_DOCS_DIR"))?;

        let completion = OpenAiService::new(LlmModelConfig::from_env()?)?;

        let prompt_preview_len = std::env::var("PROMPT_PREVIEW_LEN")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(0);

        Ok(Self {
            store: Arc::new(FsDocumentStore::new(store_root)),
            completion: Arc::new(completion),
            prompt_preview_len,
        })
    }
}
