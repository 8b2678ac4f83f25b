//! Settings export
//!
//! Turns the values of a settings form into the property payload of the
//! blob store configuration API. Only fields named `property_<name>` are
//! backend properties; everything else on the form is UI state and is
//! dropped.

use crate::error::{Error, Result};
use crate::values::{stringify_value, FormValues, PropertyPayload};
use serde_json::Value;

/// Prefix marking a form field as a backend property
pub const PROPERTY_PREFIX: &str = "property_";

/// Exports form values into a property payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsExporter {
    prefix: String,
}

impl Default for SettingsExporter {
    fn default() -> Self {
        Self {
            prefix: PROPERTY_PREFIX.to_string(),
        }
    }
}

impl SettingsExporter {
    /// Create an exporter using the standard `property_` prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter for a form that marks backend fields differently
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The prefix this exporter strips
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Export form values into a property payload.
    ///
    /// The prefix is removed once from the front of each key, so
    /// `property_property_x` becomes `property_x`. Values go through
    /// [`stringify_value`]; null becomes `""`. The input is left untouched.
    pub fn export(&self, values: &FormValues) -> PropertyPayload {
        let payload: PropertyPayload = values
            .iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(self.prefix.as_str())
                    .map(|name| (name.to_string(), stringify_value(value)))
            })
            .collect();

        tracing::debug!(
            fields = values.len(),
            properties = payload.len(),
            "exported settings form"
        );

        payload
    }

    /// Export from an untyped JSON value.
    ///
    /// Anything but an object is a caller bug and is rejected.
    pub fn export_value(&self, values: &Value) -> Result<PropertyPayload> {
        match values {
            Value::Object(map) => Ok(self.export(map)),
            other => Err(Error::invalid_argument(format!(
                "form values must be an object, got {}",
                json_kind(other)
            ))),
        }
    }
}

/// Export form values with the standard `property_` prefix
pub fn export_properties(values: &FormValues) -> PropertyPayload {
    SettingsExporter::new().export(values)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
