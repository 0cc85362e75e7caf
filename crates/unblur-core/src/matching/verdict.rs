//! Verdict types produced by the matching cascade

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which cascade stage produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    Exact,
    Substring,
    Fuzzy,
    Jaccard,
    Semantic,
    Rejected,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Exact => "exact",
            Strategy::Substring => "substring",
            Strategy::Fuzzy => "fuzzy",
            Strategy::Jaccard => "jaccard",
            Strategy::Semantic => "semantic",
            Strategy::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accept/reject decision for one guess.
///
/// `confidence` is always clamped to `[0.0, 1.0]`. For rejections it carries
/// the best lexical score seen, for analytics only; it never grants credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchVerdict {
    pub is_valid: bool,
    pub confidence: f64,
    pub strategy: Strategy,
    pub reasoning: String,
}

impl MatchVerdict {
    pub fn accept(strategy: Strategy, confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            confidence: clamp_unit(confidence),
            strategy,
            reasoning: reasoning.into(),
        }
    }

    pub fn reject(confidence: f64, reasoning: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            confidence: clamp_unit(confidence),
            strategy: Strategy::Rejected,
            reasoning: reasoning.into(),
        }
    }
}

/// Clamp to `[0, 1]`, mapping NaN to 0.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
