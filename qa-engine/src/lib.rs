//! Policy question answering with a single public entry point.
//!
//! Public API: [`answer_question`]. It assembles the context blob from the
//! document store, builds the rule-constrained prompt, issues one completion
//! call, and extracts the structured answer from the model's free-text
//! reply. Every value lives only for the duration of one call; nothing is
//! cached or shared across invocations.

mod completion;
mod error;
pub mod extract;
pub mod prompt;

pub use completion::{BoxFuture, CompletionClient};
pub use error::QaError;

use policy_store::DocumentStore;
use serde_json::Value;
use tracing::{debug, info};

/// Options that control one answering call.
#[derive(Clone, Copy, Debug, Default)]
pub struct QaOptions {
    /// When > 0, an excerpt of at most this many bytes of the built prompt
    /// is written to the debug log. 0 disables the preview entirely.
    pub prompt_preview_len: usize,
}

/// Answers one question against the documents in `store`.
///
/// Convenience wrapper over [`answer_question_with_opts`] with default
/// options.
///
/// # Errors
/// Propagates [`QaError`] from store listing, the completion call, or
/// answer extraction.
pub async fn answer_question<S, C>(
    store: &S,
    completion: &C,
    question: &str,
) -> Result<Value, QaError>
where
    S: DocumentStore + ?Sized,
    C: CompletionClient + ?Sized,
{
    answer_question_with_opts(store, completion, question, QaOptions::default()).await
}

/// Answers one question, with explicit options.
///
/// Strict sequence: assemble context → build prompt → one completion call →
/// extract answer. Per-object read failures have already degraded to inline
/// markers inside the context by the time the prompt is built; listing,
/// completion, and extraction failures abort the call.
pub async fn answer_question_with_opts<S, C>(
    store: &S,
    completion: &C,
    question: &str,
    opts: QaOptions,
) -> Result<Value, QaError>
where
    S: DocumentStore + ?Sized,
    C: CompletionClient + ?Sized,
{
    let context = policy_store::assemble_context(store).await?;
    let built = prompt::build_prompt(&context, question);
    debug!(
        context_len = context.len(),
        prompt_len = built.len(),
        "prompt built"
    );
    if opts.prompt_preview_len > 0 {
        debug!(
            preview = %prompt::preview(&built, opts.prompt_preview_len),
            "prompt preview"
        );
    }

    let raw = completion.complete(&built).await?;
    let answer = extract::extract_answer(&raw)?;

    info!(
        question_len = question.len(),
        reply_len = raw.len(),
        "question answered"
    );
    Ok(answer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_store::FsDocumentStore;
    use serde_json::json;

    /// Completion backend that records the prompt and replies with a fixed
    /// string.
    struct FixedReply {
        reply: String,
        seen_prompt: std::sync::Mutex<Option<String>>,
    }

    impl FixedReply {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                seen_prompt: std::sync::Mutex::new(None),
            }
        }
    }

    impl CompletionClient for FixedReply {
        fn complete<'a>(&'a self, prompt: &'a str) -> BoxFuture<'a, Result<String, QaError>> {
            *self.seen_prompt.lock().unwrap() = Some(prompt.to_string());
            let reply = self.reply.clone();
            Box::pin(async move { Ok(reply) })
        }
    }

    #[tokio::test]
    async fn answers_from_store_documents() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("policy.txt"),
            "Claims must be filed within 30 days.",
        )
        .unwrap();
        let store = FsDocumentStore::new(dir.path());
        let llm = FixedReply::new(
            r#"{"answer": "Yes, you are covered. See clause on 30-day filing. File your claim within 30 days."}"#,
        );

        let answer = answer_question(&store, &llm, "Am I covered?").await.unwrap();
        assert_eq!(
            answer,
            json!("Yes, you are covered. See clause on 30-day filing. File your claim within 30 days.")
        );

        // The prompt carried both the delimited document and the question.
        let prompt = llm.seen_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("--- policy.txt ---"));
        assert!(prompt.contains("Claims must be filed within 30 days."));
        assert!(prompt.contains("Am I covered?"));
    }

    #[tokio::test]
    async fn malformed_reply_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        let llm = FixedReply::new("thinking... { not json");

        let err = answer_question(&store, &llm, "Am I covered?")
            .await
            .unwrap_err();
        assert!(matches!(err, QaError::MalformedReply { .. }));
    }

    #[tokio::test]
    async fn plain_text_reply_degrades_to_verbatim_answer() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        let llm = FixedReply::new("I could not find anything relevant.");

        let answer = answer_question(&store, &llm, "Am I covered?").await.unwrap();
        assert_eq!(answer, json!("I could not find anything relevant."));
    }
}
