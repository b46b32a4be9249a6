//! Seam between the orchestration and the completion backend.

use std::{future::Future, pin::Pin};

use llm_service::OpenAiService;

use crate::error::QaError;

/// Boxed future used by the async trait method below.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Non-streaming completion backend.
///
/// Implement this trait to plug in another provider; the production client
/// lives in `llm-service`, tests use in-memory mocks.
pub trait CompletionClient: Send + Sync {
    /// Sends one prompt and returns the completion's text verbatim.
    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, QaError>>;
}

impl CompletionClient for OpenAiService {
    fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, QaError>> {
        // Inherent method on OpenAiService, not this trait method.
        Box::pin(async move { Ok(OpenAiService::complete(self, prompt).await?) })
    }
}
