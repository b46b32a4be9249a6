//! LLM configuration loaded from environment variables.

use crate::error_handler::{ConfigError, LlmError};

/// Configuration for the completion endpoint.
///
/// Decoding settings are fixed by design: temperature 0 with top_p 0.9
/// keeps the model near-deterministic. Minor output variance remains
/// inherent to the model; the answer extractor downstream absorbs it.
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// OpenAI-compatible API base, e.g. `https://api.sambanova.ai/v1`.
    pub endpoint: String,

    /// Model identifier string (e.g., `QwQ-32B`).
    pub model: String,

    /// Optional bearer token; some gateways accept anonymous calls.
    pub api_key: Option<String>,

    /// Sampling temperature.
    pub temperature: f64,

    /// Nucleus sampling parameter.
    pub top_p: f64,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Builds the config from environment variables.
    ///
    /// # Env
    /// - `LLM_API_BASE`     (default `https://api.sambanova.ai/v1`)
    /// - `MODEL_ID`         (default `QwQ-32B`)
    /// - `LLM_API_KEY`      (optional)
    /// - `LLM_TIMEOUT_SECS` (optional, u64)
    ///
    /// # Errors
    /// [`ConfigError::InvalidNumber`] if `LLM_TIMEOUT_SECS` is set but not
    /// a valid `u64`.
    pub fn from_env() -> Result<Self, LlmError> {
        let endpoint = env_or("LLM_API_BASE", "https://api.sambanova.ai/v1");
        let model = env_or("MODEL_ID", "QwQ-32B");
        let api_key = std::env::var("LLM_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?;

        Ok(Self {
            endpoint,
            model,
            api_key,
            temperature: 0.0,
            top_p: 0.9,
            timeout_secs,
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
fn env_opt_u64(name: &'static str) -> Result<Option<u64>, LlmError> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.parse::<u64>().map(Some).map_err(|_| {
            LlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}
