use std::collections::BTreeMap;

use serde::Serialize;

/// Field name to validation message
///
/// Ordered so that serialized bodies are deterministic
pub type FieldErrors = BTreeMap<String, String>;

/// Value placed under the `error` key of a response envelope
///
/// Serialized untagged: either a bare JSON string or an object of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Plain human-readable message
    Text(String),
    /// Per-field validation messages
    Fields(FieldErrors),
}

impl From<&str> for ErrorMessage {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ErrorMessage {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<FieldErrors> for ErrorMessage {
    fn from(value: FieldErrors) -> Self {
        Self::Fields(value)
    }
}
