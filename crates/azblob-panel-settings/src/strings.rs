//! Localized strings for the Azure blob store panel.
//!
//! The registry is filled once at startup (built-in English, optionally
//! overlaid with a translated bundle) and then only read. Whatever renders
//! the form receives it as a [`StringLookup`].

use azblob_panel_core::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Read-only lookup of display text by string key
pub trait StringLookup {
    /// Text for `key`, if the registry has it
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Text for `key`, falling back to the key itself
    fn text<'a>(&'a self, key: &'a str) -> &'a str {
        match self.lookup(key) {
            Some(text) => text,
            None => {
                tracing::warn!(key, "missing localized string");
                key
            }
        }
    }
}

const PLUGIN_STRINGS: &[(&str, &str)] = &[
    ("AzureBlobstore_AccountName_FieldLabel", "Account Name"),
    (
        "AzureBlobstore_AccountName_HelpText",
        "Account name found under Access keys for the storage account.\n",
    ),
    ("AzureBlobstore_AccountKey_FieldLabel", "Account Key"),
    (
        "AzureBlobstore_AccountKey_HelpText",
        "Account key found under Access keys for the storage account.",
    ),
    ("AzureBlobstore_ContainerName_FieldLabel", "Container Name"),
    (
        "AzureBlobstore_ContainerName_HelpText",
        "The name of an existing container to be used for storage.",
    ),
    ("AzureBlobstore_ClientType_FieldLabel", "Client Type"),
    (
        "AzureBlobstore_ClientType_HelpText",
        "Type of client used for connections.",
    ),
];

#[derive(Debug, Deserialize)]
struct Bundle {
    #[serde(default)]
    keys: HashMap<String, String>,
}

/// Key to display text table
#[derive(Debug, Clone, Default)]
pub struct StringRegistry {
    entries: HashMap<String, String>,
}

impl StringRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the panel's built-in English strings
    pub fn plugin_strings() -> Self {
        let mut registry = Self::new();
        for (key, text) in PLUGIN_STRINGS {
            registry.insert(*key, *text);
        }
        registry
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Overlay entries from a TOML bundle with a `[keys]` table.
    ///
    /// Returns how many keys the bundle supplied.
    pub fn merge_toml(&mut self, content: &str) -> Result<usize> {
        let bundle: Bundle = toml::from_str(content)?;
        let count = bundle.keys.len();
        self.entries.extend(bundle.keys);
        Ok(count)
    }

    /// Overlay a bundle file
    pub fn merge_file(&mut self, path: &Path) -> Result<usize> {
        if path.extension().is_none_or(|ext| ext != "toml") {
            return Err(Error::config(format!(
                "String bundle must be a .toml file: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let count = self.merge_toml(&content)?;
        tracing::info!(path = %path.display(), count, "loaded string bundle");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StringLookup for StringRegistry {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StringLookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}
