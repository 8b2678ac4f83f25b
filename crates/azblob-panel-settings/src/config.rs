//! Panel configuration
//!
//! Startup options for the settings panel, read from a JSON or TOML file
//! chosen by extension.

use crate::choices::ClientType;
use azblob_panel_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings panel configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// UI language code (e.g., "en", "de")
    pub locale: String,
    /// Client type applied when the select is first rendered blank
    #[serde(default)]
    pub default_client_type: ClientType,
    /// Optional TOML bundle overlaying the built-in strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strings_bundle: Option<PathBuf>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            default_client_type: ClientType::Sync,
            strings_bundle: None,
        }
    }
}

impl PanelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        config.validate()?;
        tracing::info!(path = %path.display(), locale = %config.locale, "loaded panel config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(Error::config("Config file must be .json or .toml"));
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(Error::config("Locale must not be empty"));
        }
        Ok(())
    }

    /// Strings for this configuration: built-ins plus the optional bundle
    pub fn load_strings(&self) -> Result<crate::strings::StringRegistry> {
        let mut strings = crate::strings::StringRegistry::plugin_strings();
        if let Some(bundle) = &self.strings_bundle {
            strings.merge_file(bundle)?;
        }
        Ok(strings)
    }
}
