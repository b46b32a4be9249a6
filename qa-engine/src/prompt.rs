//! Prompt builder: fixed instruction template around context and question.

/// Renders the full model prompt.
///
/// Fixed section order: persona line, numbered output rules, CONTEXT,
/// QUESTION, closing JSON-only reminder. The rules pin the output contract
/// the answer extractor depends on: one JSON object, one "answer" key,
/// nothing outside the object. Inputs are embedded as-is; the builder
/// trusts the store content and the question to be plain text.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        r#"You are an expert insurance-policy assistant. Use **ONLY** the text in the CONTEXT to answer.

RULES
1. Reply with valid JSON containing a single key "answer".
2. "answer" must be **exactly three short sentences** (≤ 20 words each):
   • Sentence 1 – start with Yes/No + conclusion.
   • Sentence 2 – cite one clause/page as evidence.
   • Sentence 3 – give next steps (claim form, deadline, etc.).
   - Do not include the reasoning in the answer
3. Output **nothing** outside that JSON object.
4. Remove any special characters


CONTEXT
{context}

QUESTION
{question}

Return only the JSON object described in rule 1."#
    )
}

/// Clamps `s` to at most `max` bytes on a char boundary, for log previews.
pub(crate) fn preview(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_appear_in_fixed_order() {
        let prompt = build_prompt("POLICY TEXT", "Am I covered?");
        let rules = prompt.find("RULES").unwrap();
        let context = prompt.find("CONTEXT").unwrap();
        let question = prompt.find("QUESTION").unwrap();
        let closing = prompt.find("Return only the JSON object").unwrap();
        assert!(rules < context && context < question && question < closing);
    }

    #[test]
    fn embeds_inputs_verbatim() {
        let prompt = build_prompt("clause 7 applies", "Is surgery covered?");
        assert!(prompt.contains("clause 7 applies"));
        assert!(prompt.contains("Is surgery covered?"));
    }

    #[test]
    fn empty_context_still_renders_section() {
        let prompt = build_prompt("", "Anything?");
        assert!(prompt.contains("CONTEXT\n"));
        assert!(prompt.contains("QUESTION\nAnything?"));
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let s = "héllo wörld";
        let p = preview(s, 2);
        assert!(p.len() <= 2);
        assert!(s.starts_with(p));
        assert_eq!(preview(s, 100), s);
    }
}
