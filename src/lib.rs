//! geocat-viewer
//!
//! Headless building blocks for a geospatial metadata catalog viewer: a
//! locale catalog composed from independent contributions, and a feature
//! table populated asynchronously by an embedder-supplied loader.

pub mod config;
pub mod features;
pub mod locale;

// Re-export the two entry points
pub use features::FeaturesTable;
pub use locale::LocaleCatalog;
