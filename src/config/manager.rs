//! Settings management.

use std::path::PathBuf;

use super::{
    ConfigError,
    ViewerSettings,
    loader,
};

/// Owns the current viewer settings.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Settings currently in effect.
    current_settings: ViewerSettings,

    /// Root path of the embedding workspace, when one was given.
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager holding default settings.
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: ViewerSettings::default(), workspace_root: None }
    }

    /// Loads settings from a workspace.
    ///
    /// Falls back to defaults when no workspace root is given or the
    /// workspace has no settings file.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(ViewerSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            ViewerSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the current settings after validating the new ones.
    pub fn update_settings(&mut self, new_settings: ViewerSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// Returns the settings currently in effect.
    #[must_use]
    pub const fn get_settings(&self) -> &ViewerSettings {
        &self.current_settings
    }

    /// Returns the workspace root, when one was given.
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().key_separator, ".");
        assert!(manager.workspace_root().is_none());
    }

    #[rstest]
    fn test_load_settings_without_workspace() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().key_separator, ".");
        assert!(manager.workspace_root().is_none());
    }

    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"defaultLocale": "it"}"#;
        fs::write(temp_dir.path().join(".geocat-viewer.json"), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_locale, "it");
        assert!(manager.workspace_root().is_some());
    }

    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_locale, "en");
    }

    #[rstest]
    fn test_load_settings_rejects_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"keySeparator": ""}"#;
        fs::write(temp_dir.path().join(".geocat-viewer.json"), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        // Settings in effect stay untouched on failure
        assert_eq!(manager.get_settings().key_separator, ".");
    }

    #[rstest]
    fn test_update_settings_valid() {
        let mut manager = ConfigManager::new();
        let new_settings = ViewerSettings { default_locale: "it".to_string(), ..Default::default() };

        let result = manager.update_settings(new_settings);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().default_locale, "it");
    }

    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let new_settings = ViewerSettings { key_separator: String::new(), ..Default::default() };

        let result = manager.update_settings(new_settings);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().key_separator, ".");
    }
}
