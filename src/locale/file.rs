//! Locale contribution files: parsing and locale detection.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde_json::Value;
use thiserror::Error;

use super::catalog::LocaleTable;

/// Locale identifiers the catalog ships language packs for, plus their
/// common region variants.
static KNOWN_LOCALES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [
        "ar", "ca", "cs", "da", "de", "de-DE", "el", "en", "en-GB", "en-US", "es", "es-ES", "fi",
        "fr", "fr-FR", "hu", "is", "it", "it-IT", "ja", "ko", "nl", "nl-NL", "no", "pl", "pt",
        "pt-BR", "ro", "ru", "ru-RU", "sk", "sl", "sv", "tr", "uk", "vi", "zh", "zh-CN", "zh-TW",
    ]
    .iter()
    .flat_map(|code| {
        let code = (*code).to_string();
        let normalized = normalize_locale_code(&code);
        vec![code, normalized]
    })
    .collect()
});

/// Errors raised while parsing a locale contribution file.
#[derive(Error, Debug)]
pub enum LocaleFileError {
    /// The file content is not valid JSON.
    #[error("Failed to parse locale file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document root is not a JSON object.
    #[error("Locale file root must be an object, got {0}")]
    NotAnObject(String),
}

/// Normalizes a locale code (lowercase, `-` replaced with `_`).
fn normalize_locale_code(code: &str) -> String {
    code.to_lowercase().replace('-', "_")
}

/// Detects the locale a contribution file belongs to from its path.
///
/// Splits the path by `/` and `.`, then searches backwards for a part
/// matching a known locale code.
///
/// # Examples
/// - `lang/it.json` → `it`
/// - `locales/it-IT/search.json` → `it-IT`
/// - `lang/common.json` → `None`
#[must_use]
pub fn detect_locale_from_path(file_path: &Path) -> Option<String> {
    let path_str = file_path.to_string_lossy();
    let parts: Vec<&str> = path_str.split(&['/', '.']).collect();

    for part in parts.iter().rev() {
        let normalized = normalize_locale_code(part);
        if KNOWN_LOCALES.contains(&normalized) || KNOWN_LOCALES.contains(*part) {
            return Some((*part).to_string());
        }
    }

    None
}

/// Parses a locale contribution file into a flat key table.
///
/// Nested objects are flattened into `separator`-joined keys; non-string
/// leaves are stringified as their JSON text.
///
/// # Errors
/// - JSON parse error
/// - Root is not an object
pub fn parse_locale_file(content: &str, separator: &str) -> Result<LocaleTable, LocaleFileError> {
    let json: Value = serde_json::from_str(content)?;

    if !json.is_object() {
        return Err(LocaleFileError::NotAnObject(json_kind(&json).to_string()));
    }

    Ok(flatten_json(&json, separator, None))
}

/// Short name of a JSON value's kind, for diagnostics.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Flattens a nested JSON object into a separator-joined key table.
#[must_use]
pub fn flatten_json(json: &Value, separator: &str, prefix: Option<&str>) -> LocaleTable {
    let mut result = LocaleTable::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker behind [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut LocaleTable,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}
