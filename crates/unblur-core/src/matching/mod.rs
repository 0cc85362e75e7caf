//! Answer Matching Cascade
//!
//! Decides whether a free-text guess names the hidden label. Strategies run
//! cheapest and strictest first, returning on the first acceptance:
//!
//! 1. Exact match after normalization (score: 1.0)
//! 2. Substring match with a length-ratio guard (score: the ratio)
//! 3. Levenshtein similarity (threshold: 0.95)
//! 4. Token-set Jaccard with token-count parity (threshold: 0.95)
//! 5. Semantic judgment (external, confidence >= 0.85)
//!
//! This module owns stages 1-4 and the rule for folding in stage 5. The
//! judge itself performs I/O and lives in the runtime crate.
//!
//! # Example
//!
//! ```rust
//! use unblur_core::matching::{evaluate_lexical, resolve_semantic, LexicalOutcome, MatchConfig};
//!
//! let config = MatchConfig::default();
//! if let LexicalOutcome::Undecided { scores, .. } = evaluate_lexical("dog", "golden retriever", &config) {
//!     let verdict = resolve_semantic(None, scores, &config);
//!     assert!(!verdict.is_valid);
//! }
//! ```

mod cascade;
mod config;
mod strategies;
mod verdict;

pub use cascade::{evaluate_lexical, resolve_semantic, Judgment, LexicalOutcome};
pub use config::MatchConfig;
pub use strategies::{LexicalScores, StrategyMatch};
pub use verdict::{MatchVerdict, Strategy};
