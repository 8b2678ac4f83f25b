//! Settings Controller
//!
//! Holds the live values of one settings panel and follows the host
//! widget lifecycle: choices are loaded when the form is attached, select
//! defaults are applied on first render, and values are exported on save.

use crate::choices::{Choice, ChoiceSource};
use crate::config::PanelConfig;
use crate::request::{BlobStoreRequest, AZURE_BLOBSTORE_TYPE};
use crate::strings::StringLookup;
use crate::view_model::{FieldDescriptor, FieldKind, SettingsForm};
use azblob_panel_core::{
    is_blank, stringify_value, Error, FormValues, PropertyPayload, Result, SettingsExporter,
};
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// UI-friendly representation of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldUiModel {
    pub name: String,
    pub label: String,
    pub help_text: String,
    pub kind: String,
    pub required: bool,
    /// Current value; always empty for masked fields
    pub value: String,
    pub options: Vec<Choice>,
    /// Position of the value in `options`, -1 when unset or not a select
    pub current_index: i32,
}

type ValueListener = Box<dyn Fn(&str, &Value)>;

/// Controller for one settings panel
pub struct SettingsPanel {
    form: SettingsForm,
    blobstore_type: String,
    values: FormValues,
    choices: HashMap<String, Vec<Choice>>,
    rendered: bool,
    exporter: SettingsExporter,
    listeners: Rc<RefCell<Vec<ValueListener>>>,
}

impl SettingsPanel {
    /// Create a panel for `form`, submitting as `blobstore_type`
    pub fn new(form: SettingsForm, blobstore_type: &str) -> Self {
        Self {
            form,
            blobstore_type: blobstore_type.to_string(),
            values: FormValues::new(),
            choices: HashMap::new(),
            rendered: false,
            exporter: SettingsExporter::new(),
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// The Azure Cloud Storage panel
    pub fn azure(config: &PanelConfig) -> Self {
        Self::new(
            SettingsForm::azure(config.default_client_type.id()),
            AZURE_BLOBSTORE_TYPE,
        )
    }

    pub fn form(&self) -> &SettingsForm {
        &self.form
    }

    /// Register a callback to be notified when a field value changes
    pub fn on_value_changed<F>(&self, callback: F)
    where
        F: Fn(&str, &Value) + 'static,
    {
        self.listeners.borrow_mut().push(Box::new(callback));
    }

    /// Load choices for every select field on the form
    pub async fn attach(&mut self, source: &dyn ChoiceSource) -> Result<()> {
        let selects: Vec<(String, String)> = self
            .form
            .select_fields()
            .filter_map(|f| f.choice_source().map(|s| (f.name.clone(), s.to_string())))
            .collect();

        for (field, source_id) in selects {
            let choices = source.load(&source_id).await?;
            tracing::info!(field = %field, source = %source_id, count = choices.len(), "loaded choices");
            self.choices.insert(field, choices);
        }
        Ok(())
    }

    /// Loaded choices of a select field
    pub fn choices(&self, field: &str) -> Option<&[Choice]> {
        self.choices.get(field).map(Vec::as_slice)
    }

    /// Mark the form as shown, filling blank fields that carry a default
    pub fn render(&mut self) {
        let defaults: Vec<(String, String)> = self
            .form
            .fields()
            .iter()
            .filter(|f| is_blank(self.values.get(&f.name)))
            .filter_map(|f| f.default_value.clone().map(|d| (f.name.clone(), d)))
            .collect();

        for (name, default) in defaults {
            tracing::debug!(field = %name, "applying default value");
            self.store(&name, Value::String(default));
        }
        self.rendered = true;
    }

    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// Update one field.
    ///
    /// Select fields only accept one of their loaded choice ids (or null to
    /// clear); before choices are loaded any value is taken as is.
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<()> {
        let field = self
            .form
            .field(name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))?;

        if let FieldKind::SingleSelect { .. } = field.kind {
            if let Some(choices) = self.choices.get(name) {
                let accepted = match &value {
                    Value::Null => true,
                    Value::String(id) => choices.iter().any(|c| &c.id == id),
                    _ => false,
                };
                if !accepted {
                    return Err(Error::InvalidChoice {
                        field: name.to_string(),
                        value: stringify_value(&value),
                    });
                }
            }
        }

        self.store(name, value);
        Ok(())
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Populate the form from the stored properties of an existing store.
    ///
    /// Properties with no matching form field are skipped. Returns how many
    /// were imported.
    pub fn import_properties(&mut self, properties: &PropertyPayload) -> usize {
        let mut imported = 0;
        for (name, value) in properties {
            let field = format!("{}{}", self.exporter.prefix(), name);
            if self.form.field(&field).is_none() {
                tracing::warn!(property = %name, "skipping property with no form field");
                continue;
            }
            self.store(&field, Value::String(value.clone()));
            imported += 1;
        }
        imported
    }

    /// Property payload for the current values
    pub fn export(&self) -> PropertyPayload {
        self.exporter.export(&self.values)
    }

    /// Save request for a store called `name`
    pub fn to_request(&self, name: &str) -> BlobStoreRequest {
        BlobStoreRequest::new(name, &self.blobstore_type, self.export())
    }

    /// Fields in form order, with text resolved through `strings`
    pub fn fields_for_ui(&self, strings: &dyn StringLookup) -> Vec<FieldUiModel> {
        self.form
            .fields()
            .iter()
            .map(|field| self.ui_model(field, strings))
            .collect()
    }

    fn ui_model(&self, field: &FieldDescriptor, strings: &dyn StringLookup) -> FieldUiModel {
        let value = if field.is_masked() {
            String::new()
        } else {
            self.values
                .get(&field.name)
                .map(stringify_value)
                .unwrap_or_default()
        };

        let options = self.choices.get(&field.name).cloned().unwrap_or_default();
        let current_index = options
            .iter()
            .position(|c| c.id == value)
            .map(|i| i as i32)
            .unwrap_or(-1);

        FieldUiModel {
            name: field.name.clone(),
            label: strings.text(&field.label_key).to_string(),
            help_text: strings.text(&field.help_key).to_string(),
            kind: field.kind.as_str().to_string(),
            required: field.required,
            value,
            options,
            current_index,
        }
    }

    fn store(&mut self, name: &str, value: Value) {
        if self.values.get(name) == Some(&value) {
            return;
        }
        tracing::debug!(field = %name, "field value changed");
        self.values.insert(name.to_string(), value);

        if let Some(stored) = self.values.get(name) {
            let listeners = self.listeners.borrow();
            for listener in listeners.iter() {
                listener(name, stored);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::StringRegistry;
    use crate::view_model::{ACCOUNT_KEY_FIELD, ACCOUNT_NAME_FIELD, CLIENT_TYPE_FIELD};
    use serde_json::json;

    #[test]
    fn test_render_applies_default_once() {
        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        assert!(panel.value(CLIENT_TYPE_FIELD).is_none());

        panel.render();
        assert!(panel.is_rendered());
        assert_eq!(panel.value(CLIENT_TYPE_FIELD), Some(&json!("Sync")));
        assert!(panel.value(ACCOUNT_NAME_FIELD).is_none());
    }

    #[test]
    fn test_render_keeps_chosen_value() {
        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        panel.set_value(CLIENT_TYPE_FIELD, json!("Async")).unwrap();
        panel.render();
        assert_eq!(panel.value(CLIENT_TYPE_FIELD), Some(&json!("Async")));
    }

    #[test]
    fn test_render_fills_cleared_select() {
        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        panel.set_value(CLIENT_TYPE_FIELD, Value::Null).unwrap();
        panel.render();
        assert_eq!(panel.value(CLIENT_TYPE_FIELD), Some(&json!("Sync")));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        let err = panel.set_value("property_bucket", json!("b")).unwrap_err();
        assert!(matches!(err, Error::UnknownField(name) if name == "property_bucket"));
    }

    #[test]
    fn test_listeners_see_changes_only() {
        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        panel.on_value_changed(move |name, value| {
            sink.borrow_mut().push((name.to_string(), value.clone()));
        });

        panel.set_value(ACCOUNT_NAME_FIELD, json!("acct1")).unwrap();
        panel.set_value(ACCOUNT_NAME_FIELD, json!("acct1")).unwrap();
        panel.render();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], (ACCOUNT_NAME_FIELD.to_string(), json!("acct1")));
        assert_eq!(seen[1], (CLIENT_TYPE_FIELD.to_string(), json!("Sync")));
    }

    #[test]
    fn test_masked_field_not_echoed() {
        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        panel.set_value(ACCOUNT_KEY_FIELD, json!("s3cr3t")).unwrap();

        let strings = StringRegistry::plugin_strings();
        let fields = panel.fields_for_ui(&strings);
        let key = fields.iter().find(|f| f.name == ACCOUNT_KEY_FIELD).unwrap();
        assert_eq!(key.value, "");
        assert_eq!(key.kind, "masked_text");
        assert_eq!(key.label, "Account Key");
        assert!(!key.required);

        assert_eq!(
            panel.export().get("accountKey").map(String::as_str),
            Some("s3cr3t")
        );
    }

    #[test]
    fn test_import_then_export() {
        let mut props = PropertyPayload::new();
        props.insert("accountName".to_string(), "acct1".to_string());
        props.insert("clientType".to_string(), "Async".to_string());

        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        assert_eq!(panel.import_properties(&props), 2);
        assert_eq!(panel.value(ACCOUNT_NAME_FIELD), Some(&json!("acct1")));

        panel.render();
        assert_eq!(panel.export(), props);
    }

    #[test]
    fn test_import_skips_unknown_properties() {
        let mut props = PropertyPayload::new();
        props.insert("accountName".to_string(), "acct1".to_string());
        props.insert("bucket".to_string(), "legacy".to_string());

        let mut panel = SettingsPanel::azure(&PanelConfig::default());
        assert_eq!(panel.import_properties(&props), 1);
        assert!(panel.value("property_bucket").is_none());

        let exported = panel.export();
        assert!(!exported.contains_key("bucket"));
        assert_eq!(exported.get("accountName").map(String::as_str), Some("acct1"));
    }
}
