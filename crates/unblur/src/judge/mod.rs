//! Semantic judge: the last, least auditable stage of the cascade.
//!
//! The judge is injected into [`MatchEngine`](crate::MatchEngine) as a trait
//! object so production can point it at a hosted model and tests can use a
//! deterministic stub. Any error a judge returns is treated as "no match".

mod llm;

use async_trait::async_trait;
use thiserror::Error;
use unblur_core::matching::Judgment;

use crate::llm::LlmError;

pub use llm::{parse_judgment, LlmJudge, JUDGE_RUBRIC};

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("judge unavailable")]
    Unavailable,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("malformed judgment: {0}")]
    Malformed(String),
}

/// Decides whether a guess means the same thing as the answer.
#[async_trait]
pub trait SemanticJudge: Send + Sync {
    async fn judge(
        &self,
        guess: &str,
        answer: &str,
        description: &str,
    ) -> Result<Judgment, JudgeError>;
}

/// Judge that never accepts. Used when no endpoint is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledJudge;

#[async_trait]
impl SemanticJudge for DisabledJudge {
    async fn judge(
        &self,
        _guess: &str,
        _answer: &str,
        _description: &str,
    ) -> Result<Judgment, JudgeError> {
        Err(JudgeError::Unavailable)
    }
}
