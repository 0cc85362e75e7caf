//! Round state machine as a reducer over `(GameState, RoundAction)`.
//!
//! `LOADING -> ACTIVE -> ... -> REVEALED -> LOADING`. The reducer never
//! performs I/O; anything that needs the outside world is returned as an
//! [`Effect`] for the driver to carry out.

use tracing::{debug, info};

use crate::matching::MatchVerdict;

use super::config::GameConfig;
use super::state::{Phase, Round, RoundId, RoundOutcome, RoundSeed, RoundSnapshot};

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum RoundAction {
    /// An image source delivered the next round
    Loaded(RoundSeed),
    /// The matcher classified a guess for the given round
    Verdict {
        round: RoundId,
        guess: String,
        verdict: MatchVerdict,
    },
    /// Hint text for the hint request issued after `attempt`
    HintReady {
        round: RoundId,
        attempt: u32,
        text: String,
    },
    /// Abandon the current round (active or revealed) and load another
    Skip,
    /// Leave a revealed round and load another
    NextRound,
}

/// Hint wanted after a wrong guess
#[derive(Debug, Clone, PartialEq)]
pub struct HintRequest {
    pub round: RoundId,
    pub attempt: u32,
    pub level: u32,
    pub guess: String,
    pub description: String,
    pub label: String,
    pub history: Vec<String>,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch hint text and feed it back as [`RoundAction::HintReady`]
    RequestHint(HintRequest),
    /// Write a new high score to the score store
    PersistHighScore(u32),
    /// The round ended
    Finished {
        round: RoundId,
        outcome: RoundOutcome,
        score: u32,
        label: String,
    },
    /// Ask the image source for the next round
    LoadNext,
}

/// Result of a reduction
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: GameState,
    pub effects: Vec<Effect>,
    /// `false` when the action was ignored and `state` is unchanged
    pub applied: bool,
}

/// Everything the state machine knows
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    config: GameConfig,
    round: Option<Round>,
    high_score: u32,
    next_id: u64,
}

impl GameState {
    /// A game waiting for its first round
    pub fn new(config: GameConfig, high_score: u32) -> Self {
        Self {
            config,
            round: None,
            high_score,
            next_id: 1,
        }
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn phase(&self) -> Phase {
        self.round.as_ref().map_or(Phase::Loading, Round::phase)
    }

    /// The round currently accepting guesses
    pub fn active_round(&self) -> Option<&Round> {
        self.round.as_ref().filter(|r| !r.revealed)
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let round = self.round.as_ref();
        RoundSnapshot {
            phase: self.phase(),
            round_id: round.map(|r| r.id),
            attempts: round.map_or(0, |r| r.attempts),
            max_attempts: self.config.max_attempts,
            score: round.map_or(0, |r| r.score),
            blur: round.map_or(self.config.initial_blur, |r| r.blur),
            hint_level: round.map_or(0, |r| r.hint_level),
            hint: round.and_then(|r| r.hint.clone()),
            revealed: round.is_some_and(|r| r.revealed),
            answer: round.filter(|r| r.revealed).map(|r| r.label.clone()),
            outcome: round.and_then(|r| r.outcome),
            high_score: self.high_score,
        }
    }

    /// Apply an action, producing the next state and its effects.
    pub fn reduce(&self, action: RoundAction) -> Transition {
        let mut next = self.clone();
        let mut effects = Vec::new();

        let applied = match action {
            RoundAction::Loaded(seed) => next.load(seed),
            RoundAction::Verdict {
                round,
                guess,
                verdict,
            } => next.apply_verdict(round, guess, &verdict, &mut effects),
            RoundAction::HintReady {
                round,
                attempt,
                text,
            } => next.apply_hint(round, attempt, text),
            RoundAction::Skip => next.skip(&mut effects),
            RoundAction::NextRound => next.advance(&mut effects),
        };

        if !applied {
            return Transition {
                state: self.clone(),
                effects: Vec::new(),
                applied,
            };
        }

        Transition {
            state: next,
            effects,
            applied,
        }
    }

    fn load(&mut self, seed: RoundSeed) -> bool {
        if self.round.is_some() {
            debug!("round already loaded, ignoring seed");
            return false;
        }
        if !seed.is_playable() {
            debug!("seed has an empty description or label, staying in loading");
            return false;
        }

        let id = RoundId(self.next_id);
        self.next_id += 1;
        info!(round_id = %id, "round active");
        self.round = Some(Round::new(id, seed, &self.config));
        true
    }

    fn apply_verdict(
        &mut self,
        id: RoundId,
        guess: String,
        verdict: &MatchVerdict,
        effects: &mut Vec<Effect>,
    ) -> bool {
        let config = self.config.clone();
        let Some(round) = self.round.as_mut().filter(|r| r.id == id && !r.revealed) else {
            debug!(round_id = %id, "verdict for a round that is not active, ignoring");
            return false;
        };

        if verdict.is_valid {
            round.revealed = true;
            round.blur = 0;
            round.outcome = Some(RoundOutcome::Solved);
            info!(round_id = %id, score = round.score, strategy = %verdict.strategy, "round solved");

            if round.score > self.high_score {
                self.high_score = round.score;
                effects.push(Effect::PersistHighScore(round.score));
            }
            effects.push(Effect::Finished {
                round: id,
                outcome: RoundOutcome::Solved,
                score: round.score,
                label: round.label.clone(),
            });
            return true;
        }

        round.attempts += 1;
        round.score = round.score.saturating_sub(config.score_decrement);
        round.blur = round.blur.saturating_sub(config.blur_decrement);

        if round.attempts >= config.max_attempts {
            round.score = 0;
            round.blur = 0;
            round.revealed = true;
            round.outcome = Some(RoundOutcome::Exhausted);
            info!(round_id = %id, attempts = round.attempts, "attempts exhausted");
            effects.push(Effect::Finished {
                round: id,
                outcome: RoundOutcome::Exhausted,
                score: 0,
                label: round.label.clone(),
            });
            return true;
        }

        round.hint_level = (round.hint_level + 1).min(config.max_hint_level);
        if let Some(shown) = round.hint.take() {
            round.hint_history.push(shown);
        }
        debug!(
            round_id = %id,
            attempts = round.attempts,
            score = round.score,
            blur = round.blur,
            hint_level = round.hint_level,
            "wrong guess"
        );

        effects.push(Effect::RequestHint(HintRequest {
            round: id,
            attempt: round.attempts,
            level: round.hint_level,
            guess,
            description: round.description.clone(),
            label: round.label.clone(),
            history: round.hint_history.clone(),
        }));
        true
    }

    fn apply_hint(&mut self, id: RoundId, attempt: u32, text: String) -> bool {
        match self.round.as_mut() {
            Some(round) if round.id == id && !round.revealed && round.attempts == attempt => {
                round.hint = Some(text);
                true
            }
            _ => {
                debug!(round_id = %id, attempt, "discarding stale hint");
                false
            }
        }
    }

    fn skip(&mut self, effects: &mut Vec<Effect>) -> bool {
        let Some(round) = self.round.take() else {
            return false;
        };

        if !round.revealed {
            info!(round_id = %round.id, "round skipped");
            effects.push(Effect::Finished {
                round: round.id,
                outcome: RoundOutcome::Skipped,
                score: round.score,
                label: round.label,
            });
        }
        effects.push(Effect::LoadNext);
        true
    }

    fn advance(&mut self, effects: &mut Vec<Effect>) -> bool {
        if !self.round.as_ref().is_some_and(|r| r.revealed) {
            return false;
        }
        self.round = None;
        effects.push(Effect::LoadNext);
        true
    }
}
