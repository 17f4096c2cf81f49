//! Settings file loading.

use std::path::Path;

use super::{
    ConfigError,
    FillSettings,
};

/// Loads and validates settings from a JSON file.
///
/// When `path` is `None` the built-in defaults are used (still validated, so
/// defaults and file-based settings go through the same gate).
///
/// # Errors
/// - File read error
/// - JSON parse error
/// - Validation error
pub fn load_settings(path: Option<&Path>) -> Result<FillSettings, ConfigError> {
    let settings = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Loading settings");
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        }
        None => {
            tracing::debug!("No settings file given, using defaults");
            FillSettings::default()
        }
    };

    settings.validate().map_err(ConfigError::ValidationErrors)?;
    Ok(settings)
}
