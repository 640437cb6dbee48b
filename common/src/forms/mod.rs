//! Client-side form handling: drafts, validation, and error display state.

pub mod campaign;

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ApiError;


/// One message per field name, shown under the matching input.
///
/// Local validation and backend validation responses both end up here, so the
/// form renders them the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Messages whose key is not one of `known`, e.g. `non_field_errors`.
    pub fn others<'a>(&'a self, known: &'a [&str]) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.0
            .iter()
            .filter(move |(k, _)| !known.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Maps a backend validation body into per-field messages.
    ///
    /// The body must be a JSON object; each value is either a message or a list
    /// of messages, of which the first is kept. Returns `None` for any other
    /// shape, or when no usable message is present.
    pub fn from_server(body: &Value) -> Option<Self> {
        let Value::Object(map) = body else {
            return None;
        };
        let mut errors = Self::new();
        for (field, value) in map {
            let message = match value {
                Value::String(s) => Some(s.clone()),
                Value::Array(items) => items.first().map(message_text),
                Value::Null => None,
                other => Some(other.to_string()),
            };
            if let Some(message) = message {
                errors.insert(field.clone(), message);
            }
        }
        (!errors.is_empty()).then_some(errors)
    }
}

fn message_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// How a failed submit is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitFailure {
    /// Backend validation: annotate fields, no notification.
    Fields(FieldErrors),
    /// Anything else: a generic notification, the form stays open.
    Generic,
}

impl From<&ApiError> for SubmitFailure {
    fn from(err: &ApiError) -> Self {
        match err.field_errors() {
            Some(fields) => SubmitFailure::Fields(fields),
            None => SubmitFailure::Generic,
        }
    }
}
