//! The features table component and its loader capability.
mod loader;
mod table;
mod types;

pub use loader::{
    FeatureLoader,
    JsonFileLoader,
    LoadError,
};
pub use table::{
    BindError,
    FeaturesTable,
    FeaturesTableBinding,
    LoadState,
};
pub use types::Feature;
