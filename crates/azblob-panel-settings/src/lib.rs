//! Azure Blobstore Panel Settings Crate
//!
//! Field registry, localized strings, client type choices and the
//! controller behind the Azure Cloud Storage blob store settings panel.

pub mod choices;
pub mod config;
pub mod controller;
pub mod request;
pub mod strings;
pub mod view_model;

pub use choices::{Choice, ChoiceSource, ClientType, StaticChoiceSource};
pub use config::PanelConfig;
pub use controller::{FieldUiModel, SettingsPanel};
pub use request::{attributes_key, BlobStoreRequest, AZURE_BLOBSTORE_TYPE};
pub use strings::{StringLookup, StringRegistry};
pub use view_model::{
    FieldDescriptor, FieldKind, SettingsForm, ACCOUNT_KEY_FIELD, ACCOUNT_NAME_FIELD,
    CLIENT_TYPE_FIELD, CLIENT_TYPE_SOURCE, CONTAINER_NAME_FIELD,
};
