//! Hint generation after wrong guesses.
//!
//! Generators are external and may fail or stall; [`resolve_hint`] turns any
//! request into usable text by trying the contextual hint, then the
//! progressive hint, then the static table in `unblur_core::hints`.

mod llm;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, warn};
use unblur_core::hints::fallback_hint;
use unblur_core::normalize;
use unblur_core::round::HintRequest;

use crate::llm::LlmError;

pub use llm::LlmHintGenerator;

#[derive(Error, Debug)]
pub enum HintError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("generator returned no text")]
    Empty,
}

/// Source of natural-language hints
#[async_trait]
pub trait HintGenerator: Send + Sync {
    /// Progressive hint keyed by level, avoiding anything in `history`.
    async fn generate_hint(
        &self,
        description: &str,
        level: u32,
        history: &[String],
        label: &str,
    ) -> Result<String, HintError>;

    /// Hint that reacts to the specific wrong guess, if the generator has one.
    async fn generate_contextual_hint(
        &self,
        guess: &str,
        label: &str,
        description: &str,
        level: u32,
    ) -> Result<Option<String>, HintError>;
}

/// Generator that only serves the static fallback table
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticHints;

#[async_trait]
impl HintGenerator for StaticHints {
    async fn generate_hint(
        &self,
        _description: &str,
        level: u32,
        _history: &[String],
        _label: &str,
    ) -> Result<String, HintError> {
        Ok(fallback_hint(level).to_string())
    }

    async fn generate_contextual_hint(
        &self,
        _guess: &str,
        _label: &str,
        _description: &str,
        _level: u32,
    ) -> Result<Option<String>, HintError> {
        Ok(None)
    }
}

/// Limits applied while resolving a hint
#[derive(Debug, Clone, Copy)]
pub struct HintPolicy {
    pub timeout: Duration,
    pub min_contextual_len: usize,
}

/// Produce hint text for `request`. Always returns something.
pub async fn resolve_hint(
    generator: &dyn HintGenerator,
    request: &HintRequest,
    policy: HintPolicy,
) -> String {
    let contextual = tokio::time::timeout(
        policy.timeout,
        generator.generate_contextual_hint(
            &request.guess,
            &request.label,
            &request.description,
            request.level,
        ),
    )
    .await;

    match contextual {
        Ok(Ok(Some(text))) => {
            let text = text.trim();
            if text.chars().count() >= policy.min_contextual_len && !leaks_label(text, &request.label) {
                return text.to_string();
            }
            debug!(level = request.level, "contextual hint unusable, trying progressive hint");
        }
        Ok(Ok(None)) => {}
        Ok(Err(e)) => warn!(error = %e, "contextual hint failed"),
        Err(_) => warn!("contextual hint timed out"),
    }

    let progressive = tokio::time::timeout(
        policy.timeout,
        generator.generate_hint(
            &request.description,
            request.level,
            &request.history,
            &request.label,
        ),
    )
    .await;

    match progressive {
        Ok(Ok(text)) if !text.trim().is_empty() && !leaks_label(&text, &request.label) => {
            return text.trim().to_string();
        }
        Ok(Ok(_)) => debug!(level = request.level, "progressive hint unusable"),
        Ok(Err(e)) => warn!(error = %e, "progressive hint failed"),
        Err(_) => warn!("progressive hint timed out"),
    }

    fallback_hint(request.level).to_string()
}

/// Whether the hint spells out the answer
fn leaks_label(hint: &str, label: &str) -> bool {
    let label = normalize(label);
    !label.is_empty() && normalize(hint).contains(&label)
}
