//! Round sources: where description/label pairs come from.
//!
//! Image retrieval itself is outside the engine; a source only has to hand
//! over a playable [`RoundSeed`] or fail.

use std::path::Path;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info};
use unblur_core::RoundSeed;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("no rounds available{}", category_suffix(.0))]
    Exhausted(Option<String>),

    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid catalogue: {0}")]
    Invalid(String),

    #[error("source failed: {0}")]
    Backend(String),
}

fn category_suffix(category: &Option<String>) -> String {
    category
        .as_deref()
        .map(|c| format!(" for category '{}'", c))
        .unwrap_or_default()
}

/// Supplies the next description/label pair
#[async_trait]
pub trait RoundSource: Send + Sync {
    async fn next_round(&self, category: Option<&str>) -> Result<RoundSeed, SourceError>;
}

/// In-memory list of seeds, served in order and cycled
pub struct StaticSource {
    seeds: Vec<RoundSeed>,
    cursor: Mutex<usize>,
}

impl StaticSource {
    pub fn new(seeds: Vec<RoundSeed>) -> Self {
        Self {
            seeds,
            cursor: Mutex::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

#[async_trait]
impl RoundSource for StaticSource {
    async fn next_round(&self, category: Option<&str>) -> Result<RoundSeed, SourceError> {
        let matches = |seed: &RoundSeed| match category {
            None => true,
            Some(wanted) => seed
                .category
                .as_deref()
                .is_some_and(|c| c.eq_ignore_ascii_case(wanted)),
        };

        let mut cursor = self.cursor.lock();
        let n = self.seeds.len();
        for offset in 0..n {
            let idx = (*cursor + offset) % n;
            if matches(&self.seeds[idx]) {
                *cursor = (idx + 1) % n;
                debug!(index = idx, "serving round seed");
                return Ok(self.seeds[idx].clone());
            }
        }
        Err(SourceError::Exhausted(category.map(str::to_string)))
    }
}

/// Catalogue of seeds loaded from a JSON array of
/// `{"description", "label", "category"?}` objects.
pub struct CatalogSource {
    inner: StaticSource,
}

impl CatalogSource {
    pub fn from_json(raw: &str) -> Result<Self, SourceError> {
        let seeds: Vec<RoundSeed> =
            serde_json::from_str(raw).map_err(|e| SourceError::Invalid(e.to_string()))?;

        if let Some(pos) = seeds.iter().position(|s| !s.is_playable()) {
            return Err(SourceError::Invalid(format!(
                "entry {} has an empty description or label",
                pos
            )));
        }
        if seeds.is_empty() {
            return Err(SourceError::Invalid("catalogue is empty".into()));
        }

        Ok(Self {
            inner: StaticSource::new(seeds),
        })
    }

    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        info!(path = %path.display(), rounds = catalog.inner.len(), "loaded round catalogue");
        Ok(catalog)
    }
}

#[async_trait]
impl RoundSource for CatalogSource {
    async fn next_round(&self, category: Option<&str>) -> Result<RoundSeed, SourceError> {
        self.inner.next_round(category).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"description": "A tower on a rocky coast", "label": "lighthouse", "category": "places"},
        {"description": "A dog with a golden coat", "label": "golden retriever", "category": "animals"},
        {"description": "Orange sky over the sea", "label": "sunset"}
    ]"#;

    #[tokio::test]
    async fn test_cycles_in_order() {
        let source = CatalogSource::from_json(CATALOG).unwrap();
        let labels = [
            source.next_round(None).await.unwrap().label,
            source.next_round(None).await.unwrap().label,
            source.next_round(None).await.unwrap().label,
            source.next_round(None).await.unwrap().label,
        ];
        assert_eq!(labels, ["lighthouse", "golden retriever", "sunset", "lighthouse"]);
    }

    #[tokio::test]
    async fn test_filters_by_category() {
        let source = CatalogSource::from_json(CATALOG).unwrap();
        for _ in 0..3 {
            let seed = source.next_round(Some("ANIMALS")).await.unwrap();
            assert_eq!(seed.label, "golden retriever");
        }
        let err = source.next_round(Some("food")).await.unwrap_err();
        assert!(matches!(err, SourceError::Exhausted(Some(ref c)) if c == "food"));
    }

    #[test]
    fn test_rejects_unplayable_entries() {
        let err = CatalogSource::from_json(r#"[{"description": "", "label": "x"}]"#)
            .err()
            .unwrap();
        assert!(matches!(err, SourceError::Invalid(_)));
        assert!(CatalogSource::from_json("[]").is_err());
    }

    #[tokio::test]
    async fn test_static_source_matches_category_case_insensitively() {
        let source = StaticSource::new(vec![
            RoundSeed::new("A tower on a rocky coast", "lighthouse").with_category("Places"),
            RoundSeed::new("Orange sky over the sea", "sunset"),
        ]);
        assert_eq!(source.next_round(Some("places")).await.unwrap().label, "lighthouse");
        assert_eq!(source.next_round(Some("places")).await.unwrap().label, "lighthouse");
        assert_eq!(source.next_round(None).await.unwrap().label, "sunset");
    }

    #[tokio::test]
    async fn test_empty_static_source_is_exhausted() {
        let source = StaticSource::new(Vec::new());
        assert!(source.is_empty());
        assert!(matches!(
            source.next_round(None).await,
            Err(SourceError::Exhausted(None))
        ));
    }
}
