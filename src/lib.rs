//! # Azure Blobstore Panel
//!
//! Settings panel model for the Azure Cloud Storage blob store of a host
//! administrative console:
//! - Four fields: client type, account name, account key, container name
//! - Localized label and help strings, overridable by TOML bundle
//! - Client type choices loaded when the form is attached
//! - Export of form values into the flat property payload of the blob
//!   store configuration API
//!
//! ## Architecture
//!
//! 1. **azblob-panel-core** - Form values, property export, errors
//! 2. **azblob-panel-settings** - Field registry, strings, choices, controller
//! 3. **azblob-panel** - Facade and logging bootstrap

pub use azblob_panel_core::{
    export_properties, is_blank, stringify_value, Error, FormValues, PropertyPayload, Result,
    SettingsExporter, PROPERTY_PREFIX,
};

pub use azblob_panel_settings::{
    attributes_key, BlobStoreRequest, Choice, ChoiceSource, ClientType, FieldDescriptor,
    FieldKind, FieldUiModel, PanelConfig, SettingsForm, SettingsPanel, StaticChoiceSource,
    StringLookup, StringRegistry, ACCOUNT_KEY_FIELD, ACCOUNT_NAME_FIELD, AZURE_BLOBSTORE_TYPE,
    CLIENT_TYPE_FIELD, CLIENT_TYPE_SOURCE, CONTAINER_NAME_FIELD,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
