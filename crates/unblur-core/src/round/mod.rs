//! Round state machine
//!
//! Couples match verdicts to score, blur, hint level and termination. The
//! state is a plain value; [`GameState::reduce`] maps `(state, action)` to the
//! next state plus the [`Effect`]s the caller must perform.
//!
//! # Example
//!
//! ```rust
//! use unblur_core::matching::MatchVerdict;
//! use unblur_core::round::{GameConfig, GameState, Phase, RoundAction, RoundSeed};
//!
//! let state = GameState::new(GameConfig::default(), 0)
//!     .reduce(RoundAction::Loaded(RoundSeed::new("a tower on a rocky coast", "lighthouse")))
//!     .state;
//! let id = state.round().unwrap().id;
//!
//! let t = state.reduce(RoundAction::Verdict {
//!     round: id,
//!     guess: "castle".into(),
//!     verdict: MatchVerdict::reject(0.2, "no match"),
//! });
//! assert_eq!(t.state.phase(), Phase::Active);
//! assert_eq!(t.state.round().unwrap().score, 85);
//! ```

mod config;
mod reducer;
mod state;

pub use config::GameConfig;
pub use reducer::{Effect, GameState, HintRequest, RoundAction, Transition};
pub use state::{Phase, Round, RoundId, RoundOutcome, RoundSeed, RoundSnapshot};
