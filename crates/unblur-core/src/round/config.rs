//! Scoring and disclosure constants

use serde::{Deserialize, Serialize};

/// Per-round scoring and disclosure parameters.
///
/// The defaults are the canonical game rules; changing them changes scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Wrong guesses allowed before the answer is revealed
    pub max_attempts: u32,
    /// Score at the start of a round
    pub initial_score: u32,
    /// Score lost per wrong guess
    pub score_decrement: u32,
    /// Blur radius at the start of a round
    pub initial_blur: u32,
    /// Blur removed per wrong guess
    pub blur_decrement: u32,
    /// Highest hint tier (tiers are 0..=max_hint_level)
    pub max_hint_level: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_score: 100,
            score_decrement: 15,
            initial_blur: 20,
            blur_decrement: 4,
            max_hint_level: 4,
        }
    }
}
