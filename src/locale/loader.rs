//! Locale contribution discovery: walk a directory and merge every
//! matching file into the catalog.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;
use thiserror::Error;

use super::catalog::{
    LocaleCatalog,
    LocaleTable,
};
use super::file::{
    detect_locale_from_path,
    parse_locale_file,
};
use crate::config::ViewerSettings;

/// Errors raised while setting up locale discovery.
///
/// Per-file read and parse failures are not errors: those files are logged
/// and skipped so one broken contribution cannot take down the rest.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// An include pattern from the settings is not a valid glob.
    #[error("Invalid include pattern '{pattern}': {source}")]
    InvalidIncludePattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },

    /// An exclude pattern from the settings is not a valid glob.
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidExcludePattern {
        /// The offending pattern.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: globset::Error,
    },

    /// A glob set could not be assembled from the individual patterns.
    #[error("Failed to build glob set: {0}")]
    GlobSetBuild(#[from] globset::Error),
}

/// Discovers locale files under `dir` and merges each into the catalog.
///
/// Files are selected by the settings' locale-file glob patterns, matched
/// relative to `dir`. The locale of each file is detected from its path;
/// files without a recognizable locale, unreadable files, and unparsable
/// files are logged and skipped. Files are read and parsed concurrently,
/// then merged in path order.
///
/// Returns the number of files merged.
///
/// # Errors
/// - Invalid glob pattern in the settings
pub async fn load_locale_dir(
    catalog: &mut LocaleCatalog,
    dir: &Path,
    settings: &ViewerSettings,
) -> Result<usize, DiscoveryError> {
    tracing::debug!(dir = %dir.display(), "Discovering locale files");

    let mut files = find_locale_files(dir, settings)?;
    files.sort_unstable();

    let loads: Vec<_> =
        files.iter().map(|path| load_one_file(path, &settings.key_separator)).collect();
    let results = futures::future::join_all(loads).await;

    let mut merged = 0;
    for (locale, table) in results.into_iter().flatten() {
        catalog.register(locale, table);
        merged += 1;
    }

    tracing::debug!(candidates = files.len(), merged, "Locale discovery finished");
    Ok(merged)
}

/// Reads and parses a single locale file.
///
/// Returns `None` when the file has no recognizable locale in its path or
/// cannot be read or parsed; each case is logged.
async fn load_one_file(path: &Path, separator: &str) -> Option<(String, LocaleTable)> {
    let Some(locale) = detect_locale_from_path(path) else {
        tracing::warn!(path = %path.display(), "No locale recognizable in file path, skipping");
        return None;
    };

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read locale file, skipping");
            return None;
        }
    };

    match parse_locale_file(&content, separator) {
        Ok(table) => Some((locale, table)),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to parse locale file, skipping");
            None
        }
    }
}

/// Walks `dir` and returns the files matching the locale-file patterns.
fn find_locale_files(
    dir: &Path,
    settings: &ViewerSettings,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let include_set = build_glob_set(&settings.locale_files.include_patterns, |pattern, source| {
        DiscoveryError::InvalidIncludePattern { pattern, source }
    })?;
    let exclude_set = build_glob_set(&settings.locale_files.exclude_patterns, |pattern, source| {
        DiscoveryError::InvalidExcludePattern { pattern, source }
    })?;

    let mut found_files = Vec::new();

    for result in WalkBuilder::new(dir)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();

        // Patterns match relative to the discovery root
        let Ok(relative_path) = path.strip_prefix(dir) else {
            continue;
        };
        if !include_set.is_match(relative_path) || exclude_set.is_match(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    Ok(found_files)
}

/// Builds a glob set, attributing failures to the offending pattern.
fn build_glob_set<F>(patterns: &[String], make_error: F) -> Result<GlobSet, DiscoveryError>
where
    F: Fn(String, globset::Error) -> DiscoveryError,
{
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| make_error(pattern.clone(), e))?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::config::LocaleFilesConfig;

    /// Settings whose include patterns match `lang/*.json` anywhere.
    fn lang_dir_settings() -> ViewerSettings {
        ViewerSettings {
            locale_files: LocaleFilesConfig {
                include_patterns: vec!["**/lang/*.json".to_string()],
                exclude_patterns: Vec::new(),
            },
            ..ViewerSettings::default()
        }
    }

    #[tokio::test]
    async fn test_load_locale_dir_merges_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        let lang_dir = temp_dir.path().join("lang");
        fs::create_dir(&lang_dir).unwrap();
        fs::write(lang_dir.join("it.json"), r#"{"search": {"results": "Risultati"}}"#).unwrap();
        fs::write(lang_dir.join("en.json"), r#"{"search": {"results": "Results"}}"#).unwrap();

        let mut catalog = LocaleCatalog::new();
        let merged =
            load_locale_dir(&mut catalog, temp_dir.path(), &lang_dir_settings()).await.unwrap();

        assert_eq!(merged, 2);
        assert_eq!(catalog.lookup("it", "search.results"), Some("Risultati"));
        assert_eq!(catalog.lookup("en", "search.results"), Some("Results"));
    }

    #[tokio::test]
    async fn test_load_locale_dir_skips_files_without_locale() {
        let temp_dir = TempDir::new().unwrap();
        let lang_dir = temp_dir.path().join("lang");
        fs::create_dir(&lang_dir).unwrap();
        fs::write(lang_dir.join("common.json"), r#"{"view": "View"}"#).unwrap();
        fs::write(lang_dir.join("it.json"), r#"{"view": "Visualizza"}"#).unwrap();

        let mut catalog = LocaleCatalog::new();
        let merged =
            load_locale_dir(&mut catalog, temp_dir.path(), &lang_dir_settings()).await.unwrap();

        assert_eq!(merged, 1);
        assert_eq!(catalog.lookup("it", "view"), Some("Visualizza"));
    }

    #[tokio::test]
    async fn test_load_locale_dir_skips_unparsable_files() {
        let temp_dir = TempDir::new().unwrap();
        let lang_dir = temp_dir.path().join("lang");
        fs::create_dir(&lang_dir).unwrap();
        fs::write(lang_dir.join("it.json"), "not json at all").unwrap();
        fs::write(lang_dir.join("en.json"), r#"{"view": "View"}"#).unwrap();

        let mut catalog = LocaleCatalog::new();
        let merged =
            load_locale_dir(&mut catalog, temp_dir.path(), &lang_dir_settings()).await.unwrap();

        assert_eq!(merged, 1);
        assert!(catalog.lookup("it", "view").is_none());
        assert_eq!(catalog.lookup("en", "view"), Some("View"));
    }

    #[tokio::test]
    async fn test_load_locale_dir_respects_exclude_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let lang_dir = temp_dir.path().join("lang");
        fs::create_dir(&lang_dir).unwrap();
        fs::write(lang_dir.join("it.json"), r#"{"view": "Visualizza"}"#).unwrap();
        fs::write(lang_dir.join("en.json"), r#"{"view": "View"}"#).unwrap();

        let mut settings = lang_dir_settings();
        settings.locale_files.exclude_patterns = vec!["**/en.json".to_string()];

        let mut catalog = LocaleCatalog::new();
        let merged = load_locale_dir(&mut catalog, temp_dir.path(), &settings).await.unwrap();

        assert_eq!(merged, 1);
        assert!(catalog.lookup("en", "view").is_none());
    }

    #[tokio::test]
    async fn test_load_locale_dir_rejects_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let mut settings = lang_dir_settings();
        settings.locale_files.include_patterns = vec!["{bad".to_string()];

        let mut catalog = LocaleCatalog::new();
        let result = load_locale_dir(&mut catalog, temp_dir.path(), &settings).await;

        assert!(matches!(result, Err(DiscoveryError::InvalidIncludePattern { .. })));
    }
}
