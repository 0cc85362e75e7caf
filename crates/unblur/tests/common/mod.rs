//! Shared stubs for unblur integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use unblur::hints::{HintError, HintPolicy};
use unblur::judge::JudgeError;
use unblur::llm::LlmError;
use unblur::{
    GameSession, HintGenerator, MatchEngine, RoundSource, SemanticJudge, SourceError, StaticSource,
};
use unblur_core::matching::Judgment;
use unblur_core::{MatchConfig, RoundSeed};

/// What a stub judge does when called
#[derive(Clone)]
pub enum JudgeReply {
    Verdict { is_valid: bool, confidence: f64 },
    Fail,
}

/// Judge with a scripted reply, an optional delay and a call counter
pub struct StubJudge {
    reply: JudgeReply,
    delay: Duration,
    calls: AtomicUsize,
}

impl StubJudge {
    pub fn new(reply: JudgeReply) -> Arc<Self> {
        Self::delayed(reply, Duration::ZERO)
    }

    pub fn delayed(reply: JudgeReply, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            reply,
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn accepting(confidence: f64) -> Arc<Self> {
        Self::new(JudgeReply::Verdict {
            is_valid: true,
            confidence,
        })
    }

    pub fn rejecting() -> Arc<Self> {
        Self::new(JudgeReply::Verdict {
            is_valid: false,
            confidence: 0.95,
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SemanticJudge for StubJudge {
    async fn judge(
        &self,
        _guess: &str,
        _answer: &str,
        _description: &str,
    ) -> Result<Judgment, JudgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.reply {
            JudgeReply::Verdict {
                is_valid,
                confidence,
            } => Ok(Judgment {
                is_valid: *is_valid,
                confidence: *confidence,
                reasoning: "stub".into(),
            }),
            JudgeReply::Fail => Err(JudgeError::Llm(LlmError::Malformed("stub failure".into()))),
        }
    }
}

/// Hint generator that counts requests and answers with level-tagged text
pub struct StubHints {
    contextual: Option<String>,
    delay: Duration,
    fail: bool,
    pub contextual_calls: AtomicUsize,
    pub progressive_calls: AtomicUsize,
}

impl StubHints {
    /// Serves a usable contextual hint for every request
    pub fn contextual() -> Arc<Self> {
        Arc::new(Self {
            contextual: Some("It is taller than the guess suggests".into()),
            delay: Duration::ZERO,
            fail: false,
            contextual_calls: AtomicUsize::new(0),
            progressive_calls: AtomicUsize::new(0),
        })
    }

    /// Contextual hint is too short, so the progressive hint is used
    pub fn short_contextual() -> Arc<Self> {
        Arc::new(Self {
            contextual: Some("No.".into()),
            delay: Duration::ZERO,
            fail: false,
            contextual_calls: AtomicUsize::new(0),
            progressive_calls: AtomicUsize::new(0),
        })
    }

    /// Every call fails
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            contextual: None,
            delay: Duration::ZERO,
            fail: true,
            contextual_calls: AtomicUsize::new(0),
            progressive_calls: AtomicUsize::new(0),
        })
    }

    /// Every call sleeps for `delay` first
    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            contextual: Some("It is taller than the guess suggests".into()),
            delay,
            fail: false,
            contextual_calls: AtomicUsize::new(0),
            progressive_calls: AtomicUsize::new(0),
        })
    }

    pub fn contextual_calls(&self) -> usize {
        self.contextual_calls.load(Ordering::SeqCst)
    }

    pub fn progressive_calls(&self) -> usize {
        self.progressive_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HintGenerator for StubHints {
    async fn generate_hint(
        &self,
        _description: &str,
        level: u32,
        history: &[String],
        _label: &str,
    ) -> Result<String, HintError> {
        self.progressive_calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(HintError::Empty);
        }
        Ok(format!("progressive hint {} after {} hints", level, history.len()))
    }

    async fn generate_contextual_hint(
        &self,
        _guess: &str,
        _label: &str,
        _description: &str,
        _level: u32,
    ) -> Result<Option<String>, HintError> {
        self.contextual_calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail {
            return Err(HintError::Empty);
        }
        Ok(self.contextual.clone())
    }
}

/// Source whose every call fails
pub struct BrokenSource;

#[async_trait]
impl RoundSource for BrokenSource {
    async fn next_round(&self, _category: Option<&str>) -> Result<RoundSeed, SourceError> {
        Err(SourceError::Backend("image service unreachable".into()))
    }
}

/// Static source that sleeps before each round and counts fetches
pub struct SlowSource {
    inner: StaticSource,
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowSource {
    pub fn new(seeds: Vec<RoundSeed>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner: StaticSource::new(seeds),
            delay,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoundSource for SlowSource {
    async fn next_round(&self, category: Option<&str>) -> Result<RoundSeed, SourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.inner.next_round(category).await
    }
}

pub fn hint_policy() -> HintPolicy {
    HintPolicy {
        timeout: Duration::from_secs(2),
        min_contextual_len: 12,
    }
}

pub fn seeds() -> Vec<RoundSeed> {
    vec![
        RoundSeed::new("A striped tower on a rocky coast at dusk", "lighthouse"),
        RoundSeed::new("A friendly dog with a golden coat", "golden retriever"),
    ]
}

/// Session over `seeds()` with the given judge and hint generator
pub fn session_with(judge: Arc<dyn SemanticJudge>, hints: Arc<dyn HintGenerator>) -> GameSession {
    GameSession::builder()
        .engine(MatchEngine::new(
            MatchConfig::default(),
            judge,
            Duration::from_secs(2),
        ))
        .source(Arc::new(StaticSource::new(seeds())))
        .hints(hints, hint_policy())
        .build()
        .expect("session builds")
}
