//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    ViewerSettings,
};

/// File name looked up in the workspace root.
const SETTINGS_FILE: &str = ".geocat-viewer.json";

/// Loads settings from a workspace directory.
///
/// Looks for a `.geocat-viewer.json` file in the workspace root.
///
/// # Arguments
/// * `workspace_root` - Root path of the embedding workspace
///
/// # Returns
/// - `Ok(Some(settings))`: the file was found and parsed
/// - `Ok(None)`: no settings file present
/// - `Err(ConfigError)`: read or parse failure
///
/// # Errors
/// - File read error
/// - JSON parse error
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<ViewerSettings>, ConfigError> {
    let config_path = workspace_root.join(SETTINGS_FILE);

    if !config_path.exists() {
        tracing::debug!("Settings file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading settings from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: ViewerSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
