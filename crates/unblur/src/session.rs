//! GameSession - drives the round state machine against the outside world.
//!
//! The session owns the current [`GameState`] and performs the effects the
//! reducer asks for: loading rounds, fetching hints, persisting the high
//! score. Only one guess evaluation may be in flight at a time; a second
//! submission while one is pending is dropped, not queued. Round loads are
//! single-flight the same way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use unblur_core::round::{Effect, HintRequest, Transition};
use unblur_core::storage::{HighScoreStore, MemoryStore, HIGH_SCORE_KEY};
use unblur_core::{
    GameConfig, GameState, MatchVerdict, Phase, RoundAction, RoundId, RoundOutcome, RoundSnapshot,
};

use crate::error::{Error, Result};
use crate::hints::{resolve_hint, HintGenerator, HintPolicy, StaticHints};
use crate::matcher::MatchEngine;
use crate::source::{RoundSource, SourceError};

const EVENT_CAPACITY: usize = 64;

/// Observation emitted to renderers and analytics. Never fed back in.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundEvent {
    /// Full state after any applied transition
    Snapshot(RoundSnapshot),
    /// A guess was classified and applied
    Evaluated {
        round: RoundId,
        guess: String,
        verdict: MatchVerdict,
    },
    /// A round ended
    Finished {
        round: RoundId,
        outcome: RoundOutcome,
        score: u32,
        label: String,
    },
    /// The source could not produce a playable round
    LoadFailed { error: String },
}

/// Why a guess was not evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Blank after trimming
    EmptyGuess,
    /// No round is accepting guesses
    NotActive,
    /// Another evaluation is still pending
    Busy,
}

/// Result of [`GameSession::submit_guess`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Ignored(IgnoreReason),
    Evaluated(MatchVerdict),
}

/// Clears an in-flight flag when its task ends, even on cancellation.
struct FlightGuard<'a>(&'a AtomicBool);

impl<'a> FlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Builder for [`GameSession`]
pub struct GameSessionBuilder {
    game: GameConfig,
    engine: Option<MatchEngine>,
    source: Option<Arc<dyn RoundSource>>,
    hints: Arc<dyn HintGenerator>,
    hint_policy: HintPolicy,
    store: Box<dyn HighScoreStore + Send>,
    category: Option<String>,
}

impl GameSessionBuilder {
    pub fn game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    pub fn engine(mut self, engine: MatchEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn source(mut self, source: Arc<dyn RoundSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn hints(mut self, hints: Arc<dyn HintGenerator>, policy: HintPolicy) -> Self {
        self.hints = hints;
        self.hint_policy = policy;
        self
    }

    pub fn store(mut self, store: Box<dyn HighScoreStore + Send>) -> Self {
        self.store = store;
        self
    }

    pub fn category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    /// Finish the session, reading the persisted high score.
    pub fn build(self) -> Result<GameSession> {
        let engine = self
            .engine
            .ok_or_else(|| Error::Config("session needs a match engine".into()))?;
        let source = self
            .source
            .ok_or_else(|| Error::Config("session needs a round source".into()))?;
        let high_score = self.store.high_score()?;
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        info!(high_score, "game session ready");
        Ok(GameSession {
            state: Mutex::new(GameState::new(self.game, high_score)),
            engine,
            source,
            hints: self.hints,
            hint_policy: self.hint_policy,
            store: Mutex::new(self.store),
            category: self.category,
            evaluating: AtomicBool::new(false),
            loading: AtomicBool::new(false),
            events,
        })
    }
}

/// One player's game: a sequence of rounds sharing a high score.
pub struct GameSession {
    state: Mutex<GameState>,
    engine: MatchEngine,
    source: Arc<dyn RoundSource>,
    hints: Arc<dyn HintGenerator>,
    hint_policy: HintPolicy,
    store: Mutex<Box<dyn HighScoreStore + Send>>,
    category: Option<String>,
    evaluating: AtomicBool,
    loading: AtomicBool,
    events: broadcast::Sender<RoundEvent>,
}

impl GameSession {
    pub fn builder() -> GameSessionBuilder {
        GameSessionBuilder {
            game: GameConfig::default(),
            engine: None,
            source: None,
            hints: Arc::new(StaticHints),
            hint_policy: HintPolicy {
                timeout: std::time::Duration::from_secs(8),
                min_contextual_len: 12,
            },
            store: Box::new(MemoryStore::new()),
            category: None,
        }
    }

    /// Receive every event emitted from now on
    pub fn subscribe(&self) -> broadcast::Receiver<RoundEvent> {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        self.state.lock().snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.state.lock().phase()
    }

    /// Fetch a round from the source if the session is loading.
    ///
    /// At most one fetch runs at a time; a call made while another is pending
    /// returns `Ok(())` and leaves the round to that fetch. On failure the
    /// session stays in `Loading`; retrying is up to the caller.
    pub async fn load_next(&self) -> std::result::Result<(), SourceError> {
        if self.phase() != Phase::Loading {
            return Ok(());
        }
        let Some(_flight) = FlightGuard::acquire(&self.loading) else {
            debug!("round load already in flight");
            return Ok(());
        };

        let seed = match self.source.next_round(self.category.as_deref()).await {
            Ok(seed) => seed,
            Err(e) => {
                warn!(error = %e, "round source failed");
                self.emit(RoundEvent::LoadFailed {
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        if self.dispatch(RoundAction::Loaded(seed)).is_some() {
            return Ok(());
        }
        if self.phase() != Phase::Loading {
            debug!("round became active during the fetch, dropping seed");
            return Ok(());
        }

        let e = SourceError::Invalid("round has an empty description or label".into());
        warn!(error = %e, "refusing unplayable round");
        self.emit(RoundEvent::LoadFailed {
            error: e.to_string(),
        });
        Err(e)
    }

    /// Evaluate a guess against the active round and apply the verdict.
    pub async fn submit_guess(&self, guess: &str) -> SubmitOutcome {
        let guess = guess.trim();
        if guess.is_empty() {
            return SubmitOutcome::Ignored(IgnoreReason::EmptyGuess);
        }

        let Some(flight) = FlightGuard::acquire(&self.evaluating) else {
            debug!("evaluation already in flight, dropping guess");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        };

        let (round_id, label, description) = {
            let state = self.state.lock();
            match state.active_round() {
                Some(round) => (round.id, round.label.clone(), round.description.clone()),
                None => return SubmitOutcome::Ignored(IgnoreReason::NotActive),
            }
        };

        let verdict = self.engine.evaluate(guess, &label, &description).await;
        info!(
            round_id = %round_id,
            guess,
            is_valid = verdict.is_valid,
            strategy = %verdict.strategy,
            confidence = verdict.confidence,
            "guess evaluated"
        );

        let effects = self.dispatch(RoundAction::Verdict {
            round: round_id,
            guess: guess.to_string(),
            verdict: verdict.clone(),
        });
        drop(flight);

        match effects {
            Some(effects) => {
                self.emit(RoundEvent::Evaluated {
                    round: round_id,
                    guess: guess.to_string(),
                    verdict: verdict.clone(),
                });
                self.run_effects(effects).await;
                SubmitOutcome::Evaluated(verdict)
            }
            // The round moved on while the guess was being evaluated
            None => SubmitOutcome::Ignored(IgnoreReason::NotActive),
        }
    }

    /// Abandon the current round (active or revealed) and load another.
    pub async fn skip(&self) -> std::result::Result<(), SourceError> {
        if let Some(effects) = self.dispatch(RoundAction::Skip) {
            self.run_effects(effects).await;
        }
        self.load_next().await
    }

    /// Move from a revealed round to the next one.
    pub async fn next_round(&self) -> std::result::Result<(), SourceError> {
        if let Some(effects) = self.dispatch(RoundAction::NextRound) {
            self.run_effects(effects).await;
        }
        self.load_next().await
    }

    /// Reduce under the lock; emits a snapshot and returns effects if applied.
    fn dispatch(&self, action: RoundAction) -> Option<Vec<Effect>> {
        let (effects, snapshot) = {
            let mut state = self.state.lock();
            let Transition {
                state: next,
                effects,
                applied,
            } = state.reduce(action);
            if !applied {
                return None;
            }
            *state = next;
            (effects, state.snapshot())
        };
        self.emit(RoundEvent::Snapshot(snapshot));
        Some(effects)
    }

    async fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RequestHint(request) => self.fetch_hint(request).await,
                Effect::PersistHighScore(score) => {
                    if let Err(e) = self.store.lock().put(HIGH_SCORE_KEY, score) {
                        warn!(error = %e, score, "failed to persist high score");
                    }
                }
                Effect::Finished {
                    round,
                    outcome,
                    score,
                    label,
                } => self.emit(RoundEvent::Finished {
                    round,
                    outcome,
                    score,
                    label,
                }),
                // Callers load explicitly so source errors reach them
                Effect::LoadNext => {}
            }
        }
    }

    async fn fetch_hint(&self, request: HintRequest) {
        let text = resolve_hint(self.hints.as_ref(), &request, self.hint_policy).await;
        let applied = self
            .dispatch(RoundAction::HintReady {
                round: request.round,
                attempt: request.attempt,
                text,
            })
            .is_some();
        if !applied {
            debug!(round_id = %request.round, attempt = request.attempt, "hint arrived for stale state");
        }
    }

    fn emit(&self, event: RoundEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
