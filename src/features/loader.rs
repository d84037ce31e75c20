//! The feature-loading capability and its file-backed implementation.

use std::path::PathBuf;

use futures::future::BoxFuture;
use thiserror::Error;

use super::types::Feature;

/// Errors a loader can produce while fetching or decoding features.
///
/// Cloneable so a settled failure can live inside shared component state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The underlying source could not be reached or read.
    #[error("Failed to fetch features: {0}")]
    Fetch(String),

    /// The payload could not be decoded into feature records.
    #[error("Failed to decode features: {0}")]
    Decode(String),
}

/// Capability supplied by the embedding context: fetch all features.
///
/// Implementations own transport, caching, and pagination; the table only
/// consumes the settled result. The returned sequence order is preserved
/// all the way to the rendered rows.
pub trait FeatureLoader: Send + Sync {
    /// Fetches the complete, ordered feature sequence.
    fn load_all(&self) -> BoxFuture<'_, Result<Vec<Feature>, LoadError>>;
}

/// Loader decoding an ordered JSON array of attribute objects from a file.
#[derive(Debug, Clone)]
pub struct JsonFileLoader {
    /// Path of the JSON document to decode.
    path: PathBuf,
}

impl JsonFileLoader {
    /// Creates a loader reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeatureLoader for JsonFileLoader {
    fn load_all(&self) -> BoxFuture<'_, Result<Vec<Feature>, LoadError>> {
        Box::pin(async move {
            let content = tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|e| LoadError::Fetch(format!("{}: {e}", self.path.display())))?;

            serde_json::from_str::<Vec<Feature>>(&content)
                .map_err(|e| LoadError::Decode(e.to_string()))
        })
    }
}
