//! Runtime configuration
//!
//! Loaded from an optional JSON file, then overridden from the environment:
//!
//! - `UNBLUR_LLM_ENDPOINT`: Chat-completions URL for judge and hints
//! - `UNBLUR_LLM_MODEL`: Model name for judge and hints
//! - `UNBLUR_API_KEY`: Bearer token for the endpoint
//! - `UNBLUR_JUDGE_TIMEOUT_MS`: Semantic judge timeout (default: 8000)
//! - `UNBLUR_HINT_TIMEOUT_MS`: Hint generation timeout (default: 8000)
//! - `UNBLUR_MAX_ATTEMPTS`: Wrong guesses per round (default: 5)

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unblur_core::{GameConfig, MatchConfig};

use crate::error::{Error, Result};

/// Connection settings for an OpenAI-compatible chat endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// Full chat-completions URL; `None` disables the remote call
    pub endpoint: Option<String>,
    pub model: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl LlmSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.as_deref().is_some_and(|e| !e.trim().is_empty())
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            timeout_ms: 8_000,
        }
    }
}

/// Hint generator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HintSettings {
    #[serde(flatten)]
    pub llm: LlmSettings,
    /// Contextual hints shorter than this fall back to the progressive hint
    pub min_contextual_len: usize,
}

impl Default for HintSettings {
    fn default() -> Self {
        Self {
            llm: LlmSettings::default(),
            min_contextual_len: 12,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub matching: MatchConfig,
    pub judge: LlmSettings,
    pub hints: HintSettings,
}

impl Config {
    /// Load from an optional JSON file plus process environment, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                debug!(path = %path.display(), "reading config file");
                let raw = std::fs::read_to_string(path)?;
                serde_json::from_str(&raw)?
            }
            None => Config::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `UNBLUR_*` overrides using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("UNBLUR_LLM_ENDPOINT") {
            self.judge.endpoint = Some(endpoint.clone());
            self.hints.llm.endpoint = Some(endpoint);
        }
        if let Some(model) = lookup("UNBLUR_LLM_MODEL") {
            self.judge.model = model.clone();
            self.hints.llm.model = model;
        }
        if let Some(key) = lookup("UNBLUR_API_KEY") {
            self.judge.api_key = Some(key.clone());
            self.hints.llm.api_key = Some(key);
        }
        if let Some(ms) = lookup("UNBLUR_JUDGE_TIMEOUT_MS") {
            self.judge.timeout_ms = parse_var("UNBLUR_JUDGE_TIMEOUT_MS", &ms)?;
        }
        if let Some(ms) = lookup("UNBLUR_HINT_TIMEOUT_MS") {
            self.hints.llm.timeout_ms = parse_var("UNBLUR_HINT_TIMEOUT_MS", &ms)?;
        }
        if let Some(n) = lookup("UNBLUR_MAX_ATTEMPTS") {
            self.game.max_attempts = parse_var("UNBLUR_MAX_ATTEMPTS", &n)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let bad = self.matching.invalid_thresholds();
        if !bad.is_empty() {
            return Err(Error::Config(format!(
                "thresholds must be within [0, 1]: {}",
                bad.join(", ")
            )));
        }
        if self.game.max_attempts == 0 {
            return Err(Error::Config("game.max_attempts must be at least 1".into()));
        }
        if self.judge.timeout_ms == 0 || self.hints.llm.timeout_ms == 0 {
            return Err(Error::Config("timeouts must be greater than zero".into()));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} has an invalid value '{}'", name, value)))
}
