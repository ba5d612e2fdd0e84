//! Toggle configuration
//!
//! The controller never looks anything up ambiently; the storage key, the
//! marker value, and both stylesheet URLs are carried by a config object so
//! hosts can rebind them without touching the controller.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::types;

/// Configuration for the theme toggle
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToggleConfig {
    /// Storage key the preference is persisted under
    pub storage_key: String,
    /// Marker value written when dark mode is active
    pub dark_marker: String,
    /// Stylesheet URL for the light theme
    pub light_url: String,
    /// Stylesheet URL for the dark theme
    pub dark_url: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: types::STORAGE_KEY.to_string(),
            dark_marker: types::DARK_MARKER.to_string(),
            light_url: types::LIGHT_STYLESHEET_URL.to_string(),
            dark_url: types::DARK_STYLESHEET_URL.to_string(),
        }
    }
}

impl ToggleConfig {
    /// The stylesheet URL for a theme under this configuration
    pub fn stylesheet_url(&self, dark: bool) -> &str {
        if dark {
            &self.dark_url
        } else {
            &self.light_url
        }
    }

    /// Validate the configuration
    ///
    /// Every field must be non-empty; the marker in particular must be a
    /// non-empty string.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(ThemeError::InvalidConfig(
                "storage_key cannot be empty".to_string(),
            ));
        }
        if self.dark_marker.is_empty() {
            return Err(ThemeError::InvalidConfig(
                "dark_marker cannot be empty".to_string(),
            ));
        }
        if self.light_url.is_empty() || self.dark_url.is_empty() {
            return Err(ThemeError::InvalidConfig(
                "stylesheet URLs cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a JSON file
    ///
    /// A missing file yields the default configuration, the same way an
    /// absent preference key yields the light theme.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
