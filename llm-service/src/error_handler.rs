//! Unified error handling for `llm-service`.
//!
//! One top-level [`LlmError`] for the whole crate, with configuration
//! problems grouped under [`ConfigError`]. Completion failures are fatal for
//! the invocation that triggered them; nothing in this crate retries.

use reqwest::StatusCode;
use thiserror::Error;

/// Top-level error for the `llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LlmError {
    /// Configuration/validation errors (startup time).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Underlying HTTP transport error (e.g., `reqwest::Error`).
    #[error("transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Upstream returned a non-successful HTTP status.
    #[error("HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// Numeric HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body, trimmed for logs.
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("decode error: {0}")]
    Decode(String),

    /// The completion response carried no usable choice.
    #[error("no choices in completion response")]
    EmptyChoices,
}

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (like timeouts or limits).
    #[error("invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `LLM_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL scheme).
    #[error("invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `LLM_API_BASE`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },
}

/// Cuts a response body down to a single-line snippet suitable for logs
/// and error messages.
pub(crate) fn make_snippet(body: &str) -> String {
    const MAX: usize = 240;
    let one_line = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if one_line.len() <= MAX {
        return one_line;
    }
    let mut end = MAX;
    while end > 0 && !one_line.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &one_line[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_collapses_whitespace() {
        assert_eq!(make_snippet("a\n  b\t c"), "a b c");
    }

    #[test]
    fn snippet_clamps_long_bodies() {
        let body = "x".repeat(1000);
        let snip = make_snippet(&body);
        assert!(snip.len() <= 240 + '…'.len_utf8());
        assert!(snip.ends_with('…'));
    }
}
