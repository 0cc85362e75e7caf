//! The deterministic half of the cascade and the rule for folding in a
//! semantic judgment.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::normalize::normalize;

use super::config::MatchConfig;
use super::strategies::{score_match, LexicalScores};
use super::verdict::{MatchVerdict, Strategy};

/// Result of running every lexical strategy
#[derive(Debug, Clone, PartialEq)]
pub enum LexicalOutcome {
    /// A lexical strategy cleared its threshold
    Accepted(MatchVerdict),
    /// The guess normalized to nothing; no further stage may run
    Rejected(MatchVerdict),
    /// Every lexical strategy missed; only the semantic judge can still accept
    Undecided {
        guess: String,
        answer: String,
        scores: LexicalScores,
    },
}

/// A semantic judge's answer, as reported by the judge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judgment {
    pub is_valid: bool,
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: String,
}

/// Run the lexical cascade: exact, substring, fuzzy, Jaccard.
pub fn evaluate_lexical(guess: &str, answer: &str, config: &MatchConfig) -> LexicalOutcome {
    let guess = normalize(guess);
    if guess.is_empty() {
        return LexicalOutcome::Rejected(MatchVerdict::reject(0.0, "guess is empty after normalization"));
    }
    let answer = normalize(answer);

    match score_match(&guess, &answer, config) {
        Ok(m) => {
            debug!(strategy = %m.strategy, score = m.score, "lexical match");
            let reasoning = match m.strategy {
                Strategy::Exact => "normalized guess equals the answer".to_string(),
                Strategy::Substring => format!("one text contains the other (length ratio {:.2})", m.score),
                Strategy::Fuzzy => format!("edit similarity {:.2}", m.score),
                Strategy::Jaccard => format!("word overlap {:.2}", m.score),
                Strategy::Semantic | Strategy::Rejected => String::new(),
            };
            LexicalOutcome::Accepted(MatchVerdict::accept(m.strategy, m.score, reasoning))
        }
        Err(scores) => LexicalOutcome::Undecided {
            guess,
            answer,
            scores,
        },
    }
}

/// Fold an optional semantic judgment into a final verdict.
///
/// `None` means the judge was unavailable (disabled, failed, timed out or
/// answered garbage); that is a non-match, never an error. A confidence
/// outside `[0, 1]` is garbage too.
pub fn resolve_semantic(
    judgment: Option<Judgment>,
    scores: LexicalScores,
    config: &MatchConfig,
) -> MatchVerdict {
    let judgment = judgment.filter(|j| (0.0..=1.0).contains(&j.confidence));
    if let Some(judgment) = judgment {
        let confidence = judgment.confidence;
        if judgment.is_valid && confidence >= config.semantic_min_confidence {
            return MatchVerdict::accept(Strategy::Semantic, confidence, judgment.reasoning);
        }
        debug!(
            is_valid = judgment.is_valid,
            confidence, "semantic judge declined"
        );
    }

    MatchVerdict::reject(
        scores.best(),
        format!(
            "no strategy accepted (edit {:.2}, overlap {:.2})",
            scores.fuzzy, scores.jaccard
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(outcome: LexicalOutcome) -> MatchVerdict {
        match outcome {
            LexicalOutcome::Accepted(v) => v,
            other => panic!("expected accepted outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_after_normalization() {
        let config = MatchConfig::default();
        for (guess, answer) in [
            ("Sunset!!", "sunset"),
            ("mountain ", "mountain"),
            ("GOLDEN  retriever", "golden retriever"),
            ("Eiffel Tower.", "eiffel tower"),
        ] {
            let v = accepted(evaluate_lexical(guess, answer, &config));
            assert_eq!(v.strategy, Strategy::Exact, "{} vs {}", guess, answer);
            assert_eq!(v.confidence, 1.0);
            assert!(v.is_valid);
        }
    }

    #[test]
    fn test_identity_is_always_exact() {
        let config = MatchConfig::default();
        for s in ["a", "Lighthouse", "x y z", "42", "New York City!"] {
            let v = accepted(evaluate_lexical(s, s, &config));
            assert_eq!(v.strategy, Strategy::Exact);
            assert_eq!(v.confidence, 1.0);
        }
    }

    #[test]
    fn test_empty_guess_rejected() {
        let config = MatchConfig::default();
        for guess in ["", "   ", "?!?"] {
            match evaluate_lexical(guess, "sunset", &config) {
                LexicalOutcome::Rejected(v) => {
                    assert_eq!(v.strategy, Strategy::Rejected);
                    assert_eq!(v.confidence, 0.0);
                }
                other => panic!("expected rejection, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_substring_confidence_is_ratio() {
        let v = accepted(evaluate_lexical("the lighthouse", "lighthouse", &MatchConfig::default()));
        assert_eq!(v.strategy, Strategy::Substring);
        assert!((v.confidence - 10.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_dog_is_undecided_for_golden_retriever() {
        match evaluate_lexical("dog", "golden retriever", &MatchConfig::default()) {
            LexicalOutcome::Undecided { guess, answer, scores } => {
                assert_eq!(guess, "dog");
                assert_eq!(answer, "golden retriever");
                assert!(scores.best() < 0.95);
            }
            other => panic!("expected undecided, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_semantic_accepts_confident_judge() {
        let config = MatchConfig::default();
        let v = resolve_semantic(
            Some(Judgment {
                is_valid: true,
                confidence: 0.9,
                reasoning: "a retriever is a dog breed".into(),
            }),
            LexicalScores::default(),
            &config,
        );
        assert!(v.is_valid);
        assert_eq!(v.strategy, Strategy::Semantic);
        assert_eq!(v.confidence, 0.9);
    }

    #[test]
    fn test_resolve_semantic_rejects_low_confidence() {
        let config = MatchConfig::default();
        let scores = LexicalScores {
            fuzzy: 0.4,
            jaccard: 0.5,
        };
        let v = resolve_semantic(
            Some(Judgment {
                is_valid: true,
                confidence: 0.84,
                reasoning: String::new(),
            }),
            scores,
            &config,
        );
        assert!(!v.is_valid);
        assert_eq!(v.strategy, Strategy::Rejected);
        assert_eq!(v.confidence, 0.5);
    }

    #[test]
    fn test_resolve_semantic_ignores_out_of_range_confidence() {
        let scores = LexicalScores {
            fuzzy: 0.2,
            jaccard: 0.0,
        };
        for confidence in [42.0, -0.1, f64::NAN] {
            let v = resolve_semantic(
                Some(Judgment {
                    is_valid: true,
                    confidence,
                    reasoning: String::new(),
                }),
                scores,
                &MatchConfig::default(),
            );
            assert!(!v.is_valid);
            assert_eq!(v.strategy, Strategy::Rejected);
        }
    }

    #[test]
    fn test_resolve_semantic_without_judge() {
        let scores = LexicalScores {
            fuzzy: 0.3,
            jaccard: 0.0,
        };
        let v = resolve_semantic(None, scores, &MatchConfig::default());
        assert!(!v.is_valid);
        assert_eq!(v.confidence, 0.3);
    }

    #[test]
    fn test_judgment_parses_camel_case() {
        let j: Judgment =
            serde_json::from_str(r#"{"isValid": false, "confidence": 0.2}"#).unwrap();
        assert!(!j.is_valid);
        assert!(j.reasoning.is_empty());
    }
}
