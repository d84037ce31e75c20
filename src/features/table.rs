//! The features table component.
//!
//! A table instance is bound to an embedder-supplied [`FeatureLoader`] and
//! triggers exactly one load. The lifecycle is published through a watch
//! channel so the embedding layer can re-render reactively; there is no
//! retry, cancellation, or timeout on the load.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;

use super::loader::{
    FeatureLoader,
    LoadError,
};
use super::types::Feature;

/// Load lifecycle of a table instance.
///
/// `Loading` is terminal when the loader never settles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Bound, load not yet started.
    #[default]
    Uninitialized,
    /// The initial load is in flight.
    Loading,
    /// The loader settled successfully; the ordered features are current.
    Loaded(Vec<Feature>),
    /// The loader settled with an error.
    Failed(LoadError),
}

/// Errors raised while binding a table to its embedding context.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    /// The required `loader` binding was not supplied.
    #[error("The 'loader' binding is required but was not supplied")]
    MissingLoader,
}

/// Attribute bindings supplied by the embedding context.
///
/// Mirrors the element's declared bindings: `loader` is the only one, and
/// it is required.
#[derive(Default)]
pub struct FeaturesTableBinding {
    /// Capability used to fetch the feature set.
    loader: Option<Arc<dyn FeatureLoader>>,
}

impl FeaturesTableBinding {
    /// Creates an empty binding.
    #[must_use]
    pub const fn new() -> Self {
        Self { loader: None }
    }

    /// Supplies the loader capability.
    #[must_use]
    pub fn with_loader(mut self, loader: Arc<dyn FeatureLoader>) -> Self {
        self.loader = Some(loader);
        self
    }
}

impl std::fmt::Debug for FeaturesTableBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturesTableBinding")
            .field("loader", &self.loader.as_ref().map(|_| "<dyn FeatureLoader>"))
            .finish()
    }
}

/// A table of features populated once from an asynchronous loader.
pub struct FeaturesTable {
    /// Externally supplied capability used for the single initial load.
    loader: Arc<dyn FeatureLoader>,
    /// Current lifecycle state, published to subscribers on change.
    state: Arc<watch::Sender<LoadState>>,
}

impl FeaturesTable {
    /// Binds a table to its embedding context.
    ///
    /// Validates the binding eagerly: a missing loader fails here, not at
    /// first use.
    ///
    /// # Errors
    /// - [`BindError::MissingLoader`] when no loader was supplied
    pub fn bind(binding: FeaturesTableBinding) -> Result<Self, BindError> {
        let loader = binding.loader.ok_or(BindError::MissingLoader)?;
        let (state, _) = watch::channel(LoadState::Uninitialized);
        Ok(Self { loader, state: Arc::new(state) })
    }

    /// Binds a table and immediately starts the initial load as a task on
    /// the current tokio runtime.
    ///
    /// Must be called from within a runtime; the spawned task drives the
    /// load to a settled state on its own.
    ///
    /// # Errors
    /// - [`BindError::MissingLoader`] when no loader was supplied
    pub fn spawn(binding: FeaturesTableBinding) -> Result<Self, BindError> {
        let table = Self::bind(binding)?;
        let loader = Arc::clone(&table.loader);
        let state = Arc::clone(&table.state);
        drop(tokio::spawn(async move {
            drive_load(loader.as_ref(), &state).await;
        }));
        Ok(table)
    }

    /// Runs the initial load, awaiting the loader and publishing the
    /// outcome.
    ///
    /// At most one load runs per instance: a repeat call is a logged no-op
    /// regardless of how the first load settled.
    pub async fn load(&self) {
        drive_load(self.loader.as_ref(), &self.state).await;
    }

    /// Returns a snapshot of the current lifecycle state.
    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state.borrow().clone()
    }

    /// Returns the resolved features, once the load settled successfully.
    ///
    /// `None` while the load is pending and after a failure.
    #[must_use]
    pub fn features(&self) -> Option<Vec<Feature>> {
        match &*self.state.borrow() {
            LoadState::Loaded(features) => Some(features.clone()),
            LoadState::Uninitialized | LoadState::Loading | LoadState::Failed(_) => None,
        }
    }

    /// Subscribes to lifecycle changes.
    ///
    /// The receiver observes every state the table passes through from its
    /// current value onward; the embedding layer re-renders from it.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.state.subscribe()
    }
}

impl std::fmt::Debug for FeaturesTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeaturesTable")
            .field("loader", &"<dyn FeatureLoader>")
            .field("state", &*self.state.borrow())
            .finish()
    }
}

/// Drives the single initial load: `Uninitialized → Loading`, then awaits
/// the loader and publishes `Loaded` or `Failed`.
async fn drive_load(loader: &dyn FeatureLoader, state: &watch::Sender<LoadState>) {
    let started = state.send_if_modified(|s| {
        if matches!(s, LoadState::Uninitialized) {
            *s = LoadState::Loading;
            true
        } else {
            false
        }
    });

    if !started {
        tracing::warn!("Initial load already triggered, ignoring repeat request");
        return;
    }

    match loader.load_all().await {
        Ok(features) => {
            tracing::debug!(count = features.len(), "Features loaded");
            let _ = state.send_replace(LoadState::Loaded(features));
        }
        Err(error) => {
            tracing::warn!(%error, "Feature load failed");
            let _ = state.send_replace(LoadState::Failed(error));
        }
    }
}
