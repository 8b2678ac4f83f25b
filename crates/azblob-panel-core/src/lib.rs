//! # Azure Blobstore Panel Core
//!
//! Form value model, settings export and error types shared by the
//! Azure Cloud Storage blob store settings panel.

pub mod error;
pub mod exporter;
pub mod values;

pub use error::{Error, Result};
pub use exporter::{export_properties, SettingsExporter, PROPERTY_PREFIX};
pub use values::{is_blank, stringify_value, FormValues, PropertyPayload};
