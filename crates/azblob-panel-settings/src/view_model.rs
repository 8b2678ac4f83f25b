//! Settings Form View Model
//!
//! Static description of the fields on a blob store settings panel.
//! Labels and help text are string keys, resolved against a
//! [`StringLookup`](crate::strings::StringLookup) when the form is shown.

use serde::{Deserialize, Serialize};

/// Field name of the client type select
pub const CLIENT_TYPE_FIELD: &str = "property_clientType";
/// Field name of the storage account name
pub const ACCOUNT_NAME_FIELD: &str = "property_accountName";
/// Field name of the storage account key
pub const ACCOUNT_KEY_FIELD: &str = "property_accountKey";
/// Field name of the container name
pub const CONTAINER_NAME_FIELD: &str = "property_containerName";

/// Identifier of the client type choice source
pub const CLIENT_TYPE_SOURCE: &str = "client_type";

/// Input widget kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text
    Text,
    /// Text whose value is never shown back
    MaskedText,
    /// One value out of an externally loaded list
    SingleSelect {
        /// Which choice source feeds this select
        choice_source: String,
    },
}

impl FieldKind {
    /// Short name used by UI models
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::MaskedText => "masked_text",
            Self::SingleSelect { .. } => "single_select",
        }
    }
}

/// A single form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label_key: String,
    pub help_key: String,
    pub kind: FieldKind,
    pub required: bool,
    /// Value applied on first render when the field is still blank
    pub default_value: Option<String>,
}

impl FieldDescriptor {
    /// Create an optional text field
    pub fn new(name: &str, label_key: &str, help_key: &str) -> Self {
        Self {
            name: name.to_string(),
            label_key: label_key.to_string(),
            help_key: help_key.to_string(),
            kind: FieldKind::Text,
            required: false,
            default_value: None,
        }
    }

    pub fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    /// Choice source id, for select fields
    pub fn choice_source(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::SingleSelect { choice_source } => Some(choice_source),
            _ => None,
        }
    }

    pub fn is_masked(&self) -> bool {
        matches!(self.kind, FieldKind::MaskedText)
    }
}

/// Ordered set of fields making up one settings panel
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsForm {
    fields: Vec<FieldDescriptor>,
}

impl SettingsForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing any existing field with the same name
    pub fn add_field(&mut self, field: FieldDescriptor) {
        if let Some(existing) = self.fields.iter_mut().find(|f| f.name == field.name) {
            *existing = field;
        } else {
            self.fields.push(field);
        }
    }

    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.add_field(field);
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields backed by a choice source
    pub fn select_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.choice_source().is_some())
    }

    /// The Azure Cloud Storage panel
    pub fn azure(default_client_type: &str) -> Self {
        Self::new()
            .with_field(
                FieldDescriptor::new(
                    CLIENT_TYPE_FIELD,
                    "AzureBlobstore_ClientType_FieldLabel",
                    "AzureBlobstore_ClientType_HelpText",
                )
                .with_kind(FieldKind::SingleSelect {
                    choice_source: CLIENT_TYPE_SOURCE.to_string(),
                })
                .required()
                .with_default(default_client_type),
            )
            .with_field(
                FieldDescriptor::new(
                    ACCOUNT_NAME_FIELD,
                    "AzureBlobstore_AccountName_FieldLabel",
                    "AzureBlobstore_AccountName_HelpText",
                )
                .required(),
            )
            .with_field(
                FieldDescriptor::new(
                    ACCOUNT_KEY_FIELD,
                    "AzureBlobstore_AccountKey_FieldLabel",
                    "AzureBlobstore_AccountKey_HelpText",
                )
                .with_kind(FieldKind::MaskedText),
            )
            .with_field(FieldDescriptor::new(
                CONTAINER_NAME_FIELD,
                "AzureBlobstore_ContainerName_FieldLabel",
                "AzureBlobstore_ContainerName_HelpText",
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_azure_form_layout() {
        let form = SettingsForm::azure("Sync");
        let names: Vec<&str> = form.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                CLIENT_TYPE_FIELD,
                ACCOUNT_NAME_FIELD,
                ACCOUNT_KEY_FIELD,
                CONTAINER_NAME_FIELD
            ]
        );

        let client = form.field(CLIENT_TYPE_FIELD).unwrap();
        assert!(client.required);
        assert_eq!(client.choice_source(), Some(CLIENT_TYPE_SOURCE));
        assert_eq!(client.default_value.as_deref(), Some("Sync"));

        assert!(form.field(ACCOUNT_NAME_FIELD).unwrap().required);
        assert!(form.field(ACCOUNT_KEY_FIELD).unwrap().is_masked());
        assert!(!form.field(ACCOUNT_KEY_FIELD).unwrap().required);
        assert!(!form.field(CONTAINER_NAME_FIELD).unwrap().required);
    }

    #[test]
    fn test_every_field_is_a_property() {
        let form = SettingsForm::azure("Sync");
        assert!(form
            .fields()
            .iter()
            .all(|f| f.name.starts_with(azblob_panel_core::PROPERTY_PREFIX)));
    }

    #[test]
    fn test_add_field_replaces_by_name() {
        let mut form = SettingsForm::azure("Sync");
        form.add_field(FieldDescriptor::new(CONTAINER_NAME_FIELD, "k", "h").required());
        assert_eq!(form.fields().len(), 4);
        assert!(form.field(CONTAINER_NAME_FIELD).unwrap().required);
        assert_eq!(form.select_fields().count(), 1);
    }
}
