//! Acceptance thresholds for the matching cascade

use serde::{Deserialize, Serialize};

/// Thresholds for each cascade stage.
///
/// Lexical stages are deliberately strict: an accepted guess ends the round
/// and cannot be undone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Minimum `min(len)/max(len)` for a containment hit to count
    pub substring_min_ratio: f64,
    /// Minimum normalized edit similarity
    pub fuzzy_threshold: f64,
    /// Minimum token-set Jaccard index
    pub jaccard_threshold: f64,
    /// Minimum `min(tokens)/max(tokens)` alongside the Jaccard index
    pub token_count_min_ratio: f64,
    /// Minimum confidence the semantic judge must report
    pub semantic_min_confidence: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            substring_min_ratio: 0.7,
            fuzzy_threshold: 0.95,
            jaccard_threshold: 0.95,
            token_count_min_ratio: 0.6,
            semantic_min_confidence: 0.85,
        }
    }
}

impl MatchConfig {
    /// Names of thresholds that fall outside `[0, 1]`.
    pub fn invalid_thresholds(&self) -> Vec<&'static str> {
        [
            ("substring_min_ratio", self.substring_min_ratio),
            ("fuzzy_threshold", self.fuzzy_threshold),
            ("jaccard_threshold", self.jaccard_threshold),
            ("token_count_min_ratio", self.token_count_min_ratio),
            ("semantic_min_confidence", self.semantic_min_confidence),
        ]
        .into_iter()
        .filter(|(_, v)| !(0.0..=1.0).contains(v))
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MatchConfig::default().invalid_thresholds().is_empty());
    }

    #[test]
    fn test_out_of_range_threshold_reported() {
        let config = MatchConfig {
            fuzzy_threshold: 1.5,
            ..Default::default()
        };
        assert_eq!(config.invalid_thresholds(), vec!["fuzzy_threshold"]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"fuzzy_threshold": 0.88}"#).unwrap();
        assert_eq!(config.fuzzy_threshold, 0.88);
        assert_eq!(config.jaccard_threshold, 0.95);
    }
}
