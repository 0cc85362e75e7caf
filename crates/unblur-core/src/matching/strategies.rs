//! Lexical matching strategies
//!
//! Every function takes already-normalized text. Platform-specific pieces:
//! - Native: SIMD substring search via memchr
//! - WASM: Pure Rust fallback

use crate::similarity::{edit_similarity, jaccard, length_ratio, token_count_ratio};

use super::config::MatchConfig;
use super::verdict::Strategy;

/// Match result from a strategy that cleared its threshold
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyMatch {
    pub score: f64,
    pub strategy: Strategy,
}

/// Outcome of a scored strategy: either a hit, or the score that fell short
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    Hit(StrategyMatch),
    Miss(f64),
}

impl Probe {
    pub fn score(&self) -> f64 {
        match self {
            Probe::Hit(m) => m.score,
            Probe::Miss(score) => *score,
        }
    }
}

/// Exact match after normalization (score: 1.0)
#[inline]
pub fn exact_match(guess: &str, answer: &str) -> Option<StrategyMatch> {
    if guess == answer {
        Some(StrategyMatch {
            score: 1.0,
            strategy: Strategy::Exact,
        })
    } else {
        None
    }
}

/// Containment in either direction, scored by length ratio.
///
/// The ratio guard stops "a" from matching "a golden retriever".
#[inline]
pub fn substring_match(guess: &str, answer: &str, min_ratio: f64) -> Option<StrategyMatch> {
    if !contains(answer, guess) && !contains(guess, answer) {
        return None;
    }

    let ratio = length_ratio(guess, answer);
    if ratio >= min_ratio {
        Some(StrategyMatch {
            score: ratio,
            strategy: Strategy::Substring,
        })
    } else {
        None
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "simd"))]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

#[cfg(any(target_arch = "wasm32", not(feature = "simd")))]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Normalized Levenshtein similarity
#[inline]
pub fn fuzzy_match(guess: &str, answer: &str, threshold: f64) -> Probe {
    let score = edit_similarity(guess, answer);
    if score >= threshold {
        Probe::Hit(StrategyMatch {
            score,
            strategy: Strategy::Fuzzy,
        })
    } else {
        Probe::Miss(score)
    }
}

/// Token-set Jaccard index, gated on comparable token counts
#[inline]
pub fn jaccard_match(guess: &str, answer: &str, threshold: f64, min_count_ratio: f64) -> Probe {
    let score = jaccard(guess, answer);
    if score >= threshold && token_count_ratio(guess, answer) >= min_count_ratio {
        Probe::Hit(StrategyMatch {
            score,
            strategy: Strategy::Jaccard,
        })
    } else {
        Probe::Miss(score)
    }
}

/// Best scores from the strategies that ran without accepting
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LexicalScores {
    pub fuzzy: f64,
    pub jaccard: f64,
}

impl LexicalScores {
    pub fn best(&self) -> f64 {
        self.fuzzy.max(self.jaccard)
    }
}

/// Apply the lexical strategies in order, return the first hit or the scores
/// of the strategies that missed
pub fn score_match(
    guess: &str,
    answer: &str,
    config: &MatchConfig,
) -> Result<StrategyMatch, LexicalScores> {
    // 1. Exact match
    if let Some(m) = exact_match(guess, answer) {
        return Ok(m);
    }

    // 2. Substring match
    if let Some(m) = substring_match(guess, answer, config.substring_min_ratio) {
        return Ok(m);
    }

    // 3. Edit distance
    let fuzzy = match fuzzy_match(guess, answer, config.fuzzy_threshold) {
        Probe::Hit(m) => return Ok(m),
        Probe::Miss(score) => score,
    };

    // 4. Token overlap
    let jaccard = match jaccard_match(
        guess,
        answer,
        config.jaccard_threshold,
        config.token_count_min_ratio,
    ) {
        Probe::Hit(m) => return Ok(m),
        Probe::Miss(score) => score,
    };

    Err(LexicalScores { fuzzy, jaccard })
}
