//! MatchEngine - the full answer-matching cascade.
//!
//! Runs the lexical stages from `unblur_core::matching` and, only when all of
//! them reject, consults the injected semantic judge under a timeout.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use unblur_core::matching::{evaluate_lexical, resolve_semantic, Judgment, LexicalOutcome};
use unblur_core::{MatchConfig, MatchVerdict};

use crate::judge::{DisabledJudge, JudgeError, SemanticJudge};

/// Stateless, reentrant guess classifier
#[derive(Clone)]
pub struct MatchEngine {
    config: MatchConfig,
    judge: Arc<dyn SemanticJudge>,
    judge_timeout: Duration,
}

impl MatchEngine {
    pub fn new(config: MatchConfig, judge: Arc<dyn SemanticJudge>, judge_timeout: Duration) -> Self {
        Self {
            config,
            judge,
            judge_timeout,
        }
    }

    /// Engine with the semantic stage switched off
    pub fn lexical_only(config: MatchConfig) -> Self {
        Self::new(config, Arc::new(DisabledJudge), Duration::from_secs(1))
    }

    /// Classify `guess` against `answer`. Never fails: judge trouble is a
    /// rejection.
    pub async fn evaluate(&self, guess: &str, answer: &str, description: &str) -> MatchVerdict {
        let verdict = match evaluate_lexical(guess, answer, &self.config) {
            LexicalOutcome::Accepted(verdict) | LexicalOutcome::Rejected(verdict) => verdict,
            LexicalOutcome::Undecided { scores, .. } => {
                let judgment = self.consult_judge(guess, answer, description).await;
                resolve_semantic(judgment, scores, &self.config)
            }
        };

        debug!(
            is_valid = verdict.is_valid,
            strategy = %verdict.strategy,
            confidence = verdict.confidence,
            "guess evaluated"
        );
        verdict
    }

    async fn consult_judge(&self, guess: &str, answer: &str, description: &str) -> Option<Judgment> {
        let call = self.judge.judge(guess, answer, description);
        match tokio::time::timeout(self.judge_timeout, call).await {
            Ok(Ok(judgment)) => Some(judgment),
            Ok(Err(JudgeError::Unavailable)) => None,
            Ok(Err(e)) => {
                warn!(error = %e, "semantic judge failed, treating as no match");
                None
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.judge_timeout.as_millis() as u64,
                    "semantic judge timed out, treating as no match"
                );
                None
            }
        }
    }
}
