//! The locale catalog: one merged string table per locale.

use std::collections::HashMap;

use super::builtin;

/// One locale's key to display-string table.
pub type LocaleTable = HashMap<String, String>;

/// Explicit, owned registry mapping a locale identifier to its string table.
///
/// Independently loaded contributions compose into a single table per
/// locale: [`LocaleCatalog::register`] merges rather than replaces, so a
/// later contribution never removes keys registered earlier. The embedder
/// owns the catalog and passes it where lookups happen; there is no ambient
/// global instance.
#[derive(Debug, Clone, Default)]
pub struct LocaleCatalog {
    /// Locale identifier to its merged table.
    tables: HashMap<String, LocaleTable>,
}

impl LocaleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the built-in contributions.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        catalog.register(builtin::ITALIAN, builtin::italian_table());
        catalog
    }

    /// Merges a contribution into the table for `locale`.
    ///
    /// Keys already present for the locale survive; a key occurring in both
    /// tables takes the value from the new contribution.
    pub fn register(&mut self, locale: impl Into<String>, table: LocaleTable) {
        let locale = locale.into();
        let added = table.len();
        let merged = self.tables.entry(locale.clone()).or_default();
        merged.extend(table);
        tracing::debug!(
            locale = %locale,
            entries = added,
            total = merged.len(),
            "Registered locale contribution"
        );
    }

    /// Returns the display string for `key` under `locale`.
    ///
    /// An unknown locale or key yields `None`; what to show in that case is
    /// the embedder's decision.
    #[must_use]
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.tables.get(locale)?.get(key).map(String::as_str)
    }

    /// Returns the full merged table for `locale`, when any contribution
    /// has been registered for it.
    #[must_use]
    pub fn table(&self, locale: &str) -> Option<&LocaleTable> {
        self.tables.get(locale)
    }

    /// Locale identifiers with at least one registered contribution, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }
}
