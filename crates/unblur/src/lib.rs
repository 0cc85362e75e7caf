//! # Unblur Runtime
//!
//! Async layer around `unblur-core`:
//! - **matcher**: `MatchEngine`, the full cascade including the semantic judge
//! - **judge**: `SemanticJudge` trait and the language-model judge
//! - **hints**: `HintGenerator` trait, language-model hints, fallback resolution
//! - **source**: round sources (static list, JSON catalogue)
//! - **session**: `GameSession`, the single-flight round driver and its events
//! - **store**: JSON file score store
//! - **config**: file + environment configuration
//! - **error**: Common error types
//! - **tracing**: Logging setup
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use unblur::{GameSession, MatchEngine, StaticSource};
//! use unblur_core::{MatchConfig, RoundSeed};
//!
//! let session = GameSession::builder()
//!     .engine(MatchEngine::lexical_only(MatchConfig::default()))
//!     .source(Arc::new(StaticSource::new(vec![RoundSeed::new("a tower by the sea", "lighthouse")])))
//!     .build()?;
//! session.load_next().await?;
//! session.submit_guess("Lighthouse!").await;
//! ```

pub mod config;
pub mod error;
pub mod hints;
pub mod judge;
pub mod llm;
pub mod matcher;
pub mod session;
pub mod source;
pub mod store;
pub mod tracing;

// Re-export commonly used items at crate root
pub use config::{Config, HintSettings, LlmSettings};
pub use error::{Error, Result};
pub use hints::{HintGenerator, HintPolicy, LlmHintGenerator, StaticHints};
pub use judge::{DisabledJudge, LlmJudge, SemanticJudge};
pub use matcher::MatchEngine;
pub use session::{GameSession, IgnoreReason, RoundEvent, SubmitOutcome};
pub use source::{CatalogSource, RoundSource, SourceError, StaticSource};
pub use store::JsonFileStore;
