//! Local input validation.
//!
//! Everything here runs before a request is sent, so a bad document name or
//! a malformed JSON context never costs a round trip.

use crate::error::{BdmError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field name to message, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn require(&mut self, field: &'static str, value: &str, message: &'static str) {
        if value.trim().is_empty() {
            self.0.insert(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    /// Convert into a validation error listing every message.
    pub fn into_result(self) -> Result<()> {
        if self.0.is_empty() {
            return Ok(());
        }
        let messages: Vec<&str> = self.0.values().copied().collect();
        Err(BdmError::ValidationError(messages.join("; ")))
    }
}

/// Check the fields every generated document needs.
pub fn validate_document(document_name: &str, document_type: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.require("document_name", document_name, "Document name is required");
    errors.require("document_type", document_type, "Document type is required");
    errors
}

/// Parse the optional initial context handed to AI clause generation.
///
/// Blank input means no context. Anything else must be a JSON object.
pub fn parse_initial_context(raw: &str) -> Result<Map<String, Value>> {
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(|e| {
        BdmError::ValidationError(format!("Invalid JSON in initial context: {}", e))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(BdmError::ValidationError(format!(
            "Initial context must be a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
