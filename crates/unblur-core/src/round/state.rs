//! Round types

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::GameConfig;

/// Monotonic identifier for a loaded round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundId(pub u64);

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// What an image source hands over for a new round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSeed {
    pub description: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl RoundSeed {
    pub fn new(description: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            label: label.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Both description and label carry visible text
    pub fn is_playable(&self) -> bool {
        !self.description.trim().is_empty() && !self.label.trim().is_empty()
    }
}

/// Lifecycle phase of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Loading,
    Active,
    Revealed,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundOutcome {
    /// A guess was accepted
    Solved,
    /// Every attempt was used up
    Exhausted,
    /// The player moved on before the round ended
    Skipped,
}

/// One image/label challenge.
///
/// `score` and `blur` only ever go down, `hint_level <= attempts`, and
/// `revealed` is set exactly when a guess is accepted or attempts run out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub id: RoundId,
    pub description: String,
    pub label: String,
    pub category: Option<String>,
    pub attempts: u32,
    pub score: u32,
    pub blur: u32,
    pub hint_level: u32,
    /// Hint currently displayed, if any
    pub hint: Option<String>,
    /// Every hint displayed before the current one, oldest first
    pub hint_history: Vec<String>,
    pub revealed: bool,
    pub outcome: Option<RoundOutcome>,
}

impl Round {
    pub fn new(id: RoundId, seed: RoundSeed, config: &GameConfig) -> Self {
        Self {
            id,
            description: seed.description,
            label: seed.label,
            category: seed.category,
            attempts: 0,
            score: config.initial_score,
            blur: config.initial_blur,
            hint_level: 0,
            hint: None,
            hint_history: Vec::new(),
            revealed: false,
            outcome: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.revealed {
            Phase::Revealed
        } else {
            Phase::Active
        }
    }
}

/// Read-only view of the game for renderers and analytics.
///
/// The label only appears once the round is revealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub round_id: Option<RoundId>,
    pub attempts: u32,
    pub max_attempts: u32,
    pub score: u32,
    pub blur: u32,
    pub hint_level: u32,
    pub hint: Option<String>,
    pub revealed: bool,
    pub answer: Option<String>,
    pub outcome: Option<RoundOutcome>,
    pub high_score: u32,
}
