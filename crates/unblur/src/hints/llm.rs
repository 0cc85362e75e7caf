//! Hints from a hosted language model.

use async_trait::async_trait;

use crate::llm::ChatClient;

use super::{HintError, HintGenerator};

const HINT_SYSTEM: &str = "You write hints for an image guessing game. \
Never say the answer or any word of it. Reply with one short sentence and nothing else.";

/// How specific a hint may be at each level
fn level_guidance(level: u32) -> &'static str {
    match level {
        0 | 1 => "Give a vague hint about the general category or setting.",
        2 => "Give a hint about a notable feature or property.",
        3 => "Give a specific hint about what it is used for or known for.",
        _ => "Give a very specific hint that nearly gives it away without naming it.",
    }
}

pub struct LlmHintGenerator {
    client: ChatClient,
}

impl LlmHintGenerator {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HintGenerator for LlmHintGenerator {
    async fn generate_hint(
        &self,
        description: &str,
        level: u32,
        history: &[String],
        label: &str,
    ) -> Result<String, HintError> {
        let previous = if history.is_empty() {
            "none".to_string()
        } else {
            history.join(" | ")
        };
        let prompt = format!(
            "Answer: {}\nImage description: {}\nHints already given: {}\n{} Do not repeat earlier hints.",
            label,
            description,
            previous,
            level_guidance(level)
        );
        let text = self.client.complete(HINT_SYSTEM, &prompt, false).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(HintError::Empty);
        }
        Ok(text.to_string())
    }

    async fn generate_contextual_hint(
        &self,
        guess: &str,
        label: &str,
        description: &str,
        level: u32,
    ) -> Result<Option<String>, HintError> {
        let prompt = format!(
            "Answer: {}\nImage description: {}\nThe player wrongly guessed: {}\n\
             Explain briefly how the answer differs from that guess. {}",
            label,
            description,
            guess,
            level_guidance(level)
        );
        let text = self.client.complete(HINT_SYSTEM, &prompt, false).await?;
        let text = text.trim();
        Ok((!text.is_empty()).then(|| text.to_string()))
    }
}
