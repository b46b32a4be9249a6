//! Answer extraction from free-text model replies.
//!
//! The prompt steers the model toward a bare JSON object with a single
//! "answer" key, but instruction-following is not guaranteed: models add
//! preambles ("Here is my answer:") or trailing commentary despite the
//! rules. Extraction is therefore a best-effort scanner with one documented
//! heuristic, not a JSON tokenizer: after a failed strict parse, re-parse
//! from the *last* `{` to the end of the reply. Well-formed single-object
//! output has its outermost `{` as the last `{` before any nested ones, and
//! models rarely nest objects in this use case, so the last `{` is a robust
//! anchor for the start of a trailing JSON object. Deeply nested or
//! adversarial replies can defeat the heuristic; that is an accepted
//! limitation, not something to paper over here.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::QaError;

/// Recovers the intended answer from a raw model reply.
///
/// Resolution order, first success wins:
/// 1. the whole reply parses as a JSON object carrying `"answer"` —
///    return that value;
/// 2. otherwise, the substring from the last `{` to the end parses as a
///    JSON object — return its `"answer"` value, or the whole original
///    reply verbatim when the key is missing;
/// 3. no `{` anywhere — return the reply verbatim.
///
/// The only failure path is a reply whose last-`{` substring does not parse
/// at all ([`QaError::MalformedReply`]). Everything else degrades to the
/// verbatim reply, so the answer is non-empty whenever the reply is.
/// Non-string `"answer"` values are returned as given, without
/// stringification.
pub fn extract_answer(raw: &str) -> Result<Value, QaError> {
    // Fast path: the model followed the rules.
    if let Ok(Value::Object(mut obj)) = serde_json::from_str::<Value>(raw) {
        if let Some(answer) = obj.remove("answer") {
            trace!("strict parse succeeded");
            return Ok(answer);
        }
    }

    // The model added extra text around the object: anchor on the last `{`.
    let Some(brace) = raw.rfind('{') else {
        debug!(reply_len = raw.len(), "no JSON object in reply; returning it verbatim");
        return Ok(Value::String(raw.to_string()));
    };

    match serde_json::from_str::<Value>(&raw[brace..]) {
        Ok(Value::Object(mut obj)) => match obj.remove("answer") {
            Some(answer) => {
                debug!(brace_at = brace, "recovered answer after the last '{{'");
                Ok(answer)
            }
            // A keyless recovery object is a soft failure: widen back to
            // the full reply rather than surfacing the bare fragment.
            None => {
                debug!(brace_at = brace, "recovered object lacks \"answer\"; returning reply verbatim");
                Ok(Value::String(raw.to_string()))
            }
        },
        // Text starting with `{` can only parse as an object, so any other
        // outcome means no plausible JSON object exists in the reply.
        _ => Err(QaError::MalformedReply {
            reply_len: raw.len(),
        }),
    }
}
