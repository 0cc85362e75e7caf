//! Common error types for the Unblur runtime.

use thiserror::Error;

use crate::llm::LlmError;
use crate::source::SourceError;
use unblur_core::StoreError;

/// Common error type for Unblur operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Score store error
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Round source error
    #[error("round source error: {0}")]
    Source(#[from] SourceError),

    /// Language model call error
    #[error("language model error: {0}")]
    Llm(#[from] LlmError),
}

/// Result type alias using Unblur Error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn load_round() -> Result<()> {
        Err(SourceError::Exhausted(None))?
    }

    fn call_model() -> Result<()> {
        Err(LlmError::NotConfigured)?
    }

    #[test]
    fn test_component_errors_convert() {
        assert!(matches!(load_round(), Err(Error::Source(_))));
        assert!(matches!(call_model(), Err(Error::Llm(_))));
    }
}
