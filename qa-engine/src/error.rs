//! Typed error for the qa-engine crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    /// Errors from the document store while assembling context.
    #[error("store error: {0}")]
    Store(#[from] policy_store::StoreError),

    /// Errors from the completion backend.
    #[error("completion error: {0}")]
    Completion(#[from] llm_service::LlmError),

    /// The model reply contains a `{` but nothing from the last one parses
    /// as a JSON object. Returning the unparsed text here would be
    /// misleading downstream, so this aborts the invocation instead.
    #[error("malformed model reply: no parsable JSON object from the last '{{' (reply length {reply_len})")]
    MalformedReply {
        /// Length of the offending reply, for log correlation.
        reply_len: usize,
    },
}
