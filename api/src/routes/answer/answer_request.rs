use serde::Serialize;
use serde_json::Value;

use crate::error_handler::AppError;

/// Response payload for /answer_question.
#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    /// Echo of the question that was answered.
    pub question: String,
    /// Extracted answer. Usually a string; whatever JSON shape the model
    /// put under "answer" is passed through unchanged.
    pub answer: Value,
}

/// Resolves the question string from the inbound payload.
///
/// The payload is either the question object itself, or the same object
/// JSON-encoded in a string `body` field — the shape HTTP gateways wrap
/// requests in. The resolved object must carry a string `question`.
///
/// # Errors
/// [`AppError::BadRequest`] with a human-readable message for every
/// malformed shape; nothing here is fatal for the process.
pub fn resolve_question(payload: Value) -> Result<String, AppError> {
    let resolved = match payload.get("body") {
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw).map_err(|e| {
            AppError::BadRequest(format!("`body` is not valid JSON: {e}"))
        })?,
        Some(inner) => inner.clone(),
        None => payload,
    };

    match resolved.get("question") {
        Some(Value::String(q)) => Ok(q.clone()),
        Some(_) => Err(AppError::BadRequest(
            "`question` must be a string".to_string(),
        )),
        None => Err(AppError::BadRequest(
            "missing `question` field".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_question_from_direct_object() {
        let q = resolve_question(json!({"question": "Am I covered?"})).unwrap();
        assert_eq!(q, "Am I covered?");
    }

    #[test]
    fn reads_question_from_string_encoded_body() {
        let q = resolve_question(json!({"body": "{\"question\": \"Am I covered?\"}"})).unwrap();
        assert_eq!(q, "Am I covered?");
    }

    #[test]
    fn reads_question_from_nested_body_object() {
        let q = resolve_question(json!({"body": {"question": "Am I covered?"}})).unwrap();
        assert_eq!(q, "Am I covered?");
    }

    #[test]
    fn missing_question_is_bad_request() {
        let err = resolve_question(json!({"q": "nope"})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn non_string_question_is_bad_request() {
        let err = resolve_question(json!({"question": 42})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn unparsable_body_string_is_bad_request() {
        let err = resolve_question(json!({"body": "{nope"})).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
