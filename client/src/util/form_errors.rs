//! Per-form validation state and mapping of backend error bodies onto it.
//!
//! The backend answers failed form posts in a few shapes: a bare string, a
//! `{"detail": ...}` or `{"error": ...}` envelope, or an object keyed by field
//! name whose values are a message or a list of messages.

#[cfg(test)]
#[path = "form_errors_test.rs"]
mod form_errors_test;

use std::collections::BTreeMap;

use serde_json::Value;

/// Key the backend uses for errors not tied to one field.
const NON_FIELD_KEY: &str = "non_field_errors";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// Message shown above the form.
    pub root: Option<String>,
    /// Field name to its first error message.
    pub fields: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn with_root(message: impl Into<String>) -> Self {
        Self { root: Some(message.into()), fields: BTreeMap::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none() && self.fields.is_empty()
    }

    /// Record an error for `field` unless it already has one.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields.entry(field.to_owned()).or_insert_with(|| message.into());
    }

    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// `Ok` when nothing was recorded, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Map a backend error body onto form state.
    ///
    /// `fallback` becomes the root message whenever the body carries nothing
    /// usable.
    pub fn from_server_body(body: &Value, fallback: &str) -> Self {
        let mapped = match body {
            Value::String(message) => Self::with_root(message.as_str()),
            Value::Object(map) => {
                if let Some(detail) = map.get("detail").and_then(first_message) {
                    Self::with_root(detail)
                } else if let Some(error) = map.get("error").and_then(first_message) {
                    Self::with_root(error)
                } else {
                    let mut errors = Self::default();
                    for (key, value) in map {
                        let Some(message) = first_message(value) else {
                            continue;
                        };
                        if key == NON_FIELD_KEY {
                            errors.root.get_or_insert(message);
                        } else {
                            errors.add(key, message);
                        }
                    }
                    errors
                }
            }
            _ => Self::default(),
        };

        if mapped.is_empty() || mapped.root.as_deref() == Some("") {
            return Self { root: Some(fallback.to_owned()), fields: mapped.fields };
        }
        mapped
    }
}

/// First human-readable message in a string, list, or scalar value.
fn first_message(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_message),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Object(_) => None,
    }
}
