//! Form values and property payloads
//!
//! `FormValues` is what the host form hands over on save: field identifier
//! to raw value. `PropertyPayload` is the flat string map the blob store
//! configuration API receives.

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Current values of a settings form, keyed by field identifier
pub type FormValues = Map<String, Value>;

/// Backend properties, keyed by property name with string values
pub type PropertyPayload = BTreeMap<String, String>;

/// Render a form value as the string the backend expects.
///
/// Null maps to the empty string so an optional field the user cleared is
/// still submitted. Whole-number floats print without a fraction (`1.0`
/// becomes `"1"`). Arrays and objects are not produced by the form's
/// widgets; if one shows up it is sent as compact JSON text.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

// Whole floats below 1e21 drop the fraction; larger ones keep exponent form.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

/// Whether a value counts as "no value" for a form field.
///
/// Used by select defaults: null and empty strings are unset.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}
