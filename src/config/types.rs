//! Viewer settings and their validation.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A single structural problem found while validating settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "localeFiles.includePatterns[0]")
    pub field_path: String,
    /// Human-readable description of the problem.
    pub message: String,
}

impl ValidationError {
    /// Creates a validation error for a field path.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors raised while loading or validating viewer settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more fields failed structural validation.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The settings file could not be read.
    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// The settings file is not valid JSON for the expected shape.
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Formats collected validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for the catalog viewer components.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerSettings {
    /// Where locale contribution files live and how they are matched.
    pub locale_files: LocaleFilesConfig,

    /// Separator used when flattening nested locale JSON into dotted keys.
    pub key_separator: String,

    /// Locale served when the embedder does not pick one explicitly.
    pub default_locale: String,
}

/// Glob patterns selecting locale contribution files under a directory.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleFilesConfig {
    /// Patterns a file must match to be treated as a locale contribution.
    pub include_patterns: Vec<String>,
    /// Patterns excluding files that would otherwise match.
    pub exclude_patterns: Vec<String>,
}

impl ViewerSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.default_locale.is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The locale cannot be empty. Example: \"en\"",
            ));
        }

        if self.locale_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "localeFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/lang/*.json\"]",
            ));
        }

        for (index, pattern) in self.locale_files.include_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("localeFiles.includePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        for (index, pattern) in self.locale_files.exclude_patterns.iter().enumerate() {
            if let Err(e) = globset::Glob::new(pattern) {
                errors.push(ValidationError::new(
                    format!("localeFiles.excludePatterns[{index}]"),
                    format!("Invalid glob pattern '{pattern}': {e}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            locale_files: LocaleFilesConfig::default(),
            key_separator: ".".to_string(),
            default_locale: "en".to_string(),
        }
    }
}

impl Default for LocaleFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/{lang,locales}/**/*.json".to_string()],
            exclude_patterns: Vec::new(),
        }
    }
}
