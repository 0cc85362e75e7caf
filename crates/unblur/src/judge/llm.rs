//! Judge backed by a hosted language model.

use async_trait::async_trait;
use tracing::debug;
use unblur_core::matching::Judgment;

use crate::llm::{extract_json_object, ChatClient};

use super::{JudgeError, SemanticJudge};

/// System prompt: a strict rubric that defaults to rejection.
pub const JUDGE_RUBRIC: &str = "You judge answers in an image guessing game. \
Decide whether the player's guess names the same subject as the correct answer. \
Be strict: reject vague or generic guesses (\"animal\" for \"golden retriever\"), \
reject anything with less than 70% semantic similarity, and reject when in doubt. \
Accept synonyms, common alternative names and minor spelling variants. \
Reply with a JSON object only: {\"isValid\": boolean, \"confidence\": number between 0 and 1, \"reasoning\": string}.";

pub struct LlmJudge {
    client: ChatClient,
}

impl LlmJudge {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SemanticJudge for LlmJudge {
    async fn judge(
        &self,
        guess: &str,
        answer: &str,
        description: &str,
    ) -> Result<Judgment, JudgeError> {
        let prompt = format!(
            "Correct answer: {}\nImage description: {}\nPlayer guess: {}",
            answer, description, guess
        );
        let text = self.client.complete(JUDGE_RUBRIC, &prompt, true).await?;
        debug!(response = %text, "judge response");
        parse_judgment(&text)
    }
}

/// Parse model output into a judgment.
///
/// Missing fields, non-JSON text and a confidence outside `[0, 1]` are malformed.
pub fn parse_judgment(text: &str) -> Result<Judgment, JudgeError> {
    let raw = extract_json_object(text)
        .ok_or_else(|| JudgeError::Malformed("no JSON object in response".into()))?;
    let judgment: Judgment =
        serde_json::from_str(raw).map_err(|e| JudgeError::Malformed(e.to_string()))?;
    if !(0.0..=1.0).contains(&judgment.confidence) {
        return Err(JudgeError::Malformed(format!(
            "confidence {} outside [0, 1]",
            judgment.confidence
        )));
    }
    Ok(judgment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_plain_json() {
        let j = parse_judgment(r#"{"isValid": true, "confidence": 0.92, "reasoning": "synonym"}"#)
            .unwrap();
        assert!(j.is_valid);
        assert_eq!(j.confidence, 0.92);
        assert_eq!(j.reasoning, "synonym");
    }

    #[test]
    fn test_parses_json_wrapped_in_prose() {
        let j = parse_judgment("Sure! {\"isValid\": false, \"confidence\": 0.1} Hope that helps.")
            .unwrap();
        assert!(!j.is_valid);
    }

    #[test]
    fn test_missing_fields_are_malformed() {
        assert!(matches!(
            parse_judgment(r#"{"confidence": 0.9}"#),
            Err(JudgeError::Malformed(_))
        ));
        assert!(matches!(
            parse_judgment("yes, that's right"),
            Err(JudgeError::Malformed(_))
        ));
    }

    #[test]
    fn test_out_of_range_confidence_is_malformed() {
        for reply in [
            r#"{"isValid": true, "confidence": 42.0}"#,
            r#"{"isValid": true, "confidence": -0.5}"#,
        ] {
            assert!(matches!(parse_judgment(reply), Err(JudgeError::Malformed(_))));
        }
        assert!(parse_judgment(r#"{"isValid": true, "confidence": 1.0}"#).is_ok());
    }
}
