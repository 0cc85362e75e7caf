//! Storage abstraction for high scores
//!
//! The game only persists one number: the best score so far, stored as an
//! opaque integer under [`HIGH_SCORE_KEY`]. The `HighScoreStore` trait keeps
//! the backend swappable:
//!
//! - **Memory**: In-memory storage for testing (`MemoryStore`)
//! - **JSON file**: Native file storage (runtime crate, native only)
//!
//! # Example
//!
//! ```rust
//! use unblur_core::storage::{HighScoreStore, MemoryStore, HIGH_SCORE_KEY};
//!
//! let mut store = MemoryStore::new();
//! assert_eq!(store.high_score().unwrap(), 0);
//!
//! store.put(HIGH_SCORE_KEY, 85).unwrap();
//! assert_eq!(store.high_score().unwrap(), 85);
//! ```

mod error;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use traits::{HighScoreStore, HIGH_SCORE_KEY};
