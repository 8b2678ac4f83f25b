//! Error handling for the Azure blob store panel
//!
//! The export transform itself is total over well-formed maps. Errors here
//! cover programming errors at the untyped boundary and the ambient
//! concerns around the panel: field updates, choice loading and
//! configuration files.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Panel error type
#[derive(Error, Debug)]
pub enum Error {
    /// The caller passed something that is not a form value mapping
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No field with this name exists on the form
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A select field was given a value outside its loaded choices
    #[error("Invalid choice '{value}' for field '{field}'")]
    InvalidChoice {
        /// The select field name.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// The choice source for a select field could not be loaded
    #[error("Failed to load choices for '{source_id}': {reason}")]
    ChoiceLoad {
        /// Identifier of the choice source.
        source_id: String,
        /// Why loading failed.
        reason: String,
    },

    /// A configuration value or file is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error while reading configuration or string bundles
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// Create a configuration error from a message
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid-argument error from a message
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type alias for panel operations.
pub type Result<T> = std::result::Result<T, Error>;
