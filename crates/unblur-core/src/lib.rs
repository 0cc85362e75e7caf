//! Unblur Core Engine
//!
//! The computational kernel of the guessing game: deciding whether a free-text
//! guess names the hidden label of a blurred image, and coupling that decision
//! to score, blur, hints and round termination. Everything here is synchronous
//! and free of I/O so it runs identically in the browser (WASM) and natively.
//!
//! # Features
//!
//! - `native` - Enable all native optimizations
//! - `simd` - SIMD-accelerated substring search via memchr
//! - `wasm` - WASM-compatible build (excludes native-only features)
//!
//! # Example
//!
//! ```rust
//! use unblur_core::matching::{evaluate_lexical, LexicalOutcome, MatchConfig, Strategy};
//!
//! let outcome = evaluate_lexical("Sunset!!", "sunset", &MatchConfig::default());
//! match outcome {
//!     LexicalOutcome::Accepted(verdict) => assert_eq!(verdict.strategy, Strategy::Exact),
//!     _ => unreachable!(),
//! }
//! ```

pub mod hints;
pub mod matching;
pub mod normalize;
pub mod round;
pub mod similarity;
pub mod storage;

// Re-export main types at crate root
pub use matching::{evaluate_lexical, LexicalOutcome, MatchConfig, MatchVerdict, Strategy};
pub use normalize::{normalize, tokens};
pub use round::{
    Effect, GameConfig, GameState, Phase, Round, RoundAction, RoundId, RoundOutcome, RoundSeed,
    RoundSnapshot,
};
pub use storage::{HighScoreStore, MemoryStore, StoreError, HIGH_SCORE_KEY};
