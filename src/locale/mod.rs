//! Locale catalog and the loading of locale contributions.
mod builtin;
mod catalog;
mod file;
mod loader;

pub use builtin::{
    ITALIAN,
    italian_table,
};
pub use catalog::{
    LocaleCatalog,
    LocaleTable,
};
pub use file::{
    LocaleFileError,
    detect_locale_from_path,
    flatten_json,
    parse_locale_file,
};
pub use loader::{
    DiscoveryError,
    load_locale_dir,
};
