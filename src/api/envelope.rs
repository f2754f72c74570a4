//! Response envelope handling and contract checks.
//!
//! Kept separate from the transport so the checks can be tested on plain
//! JSON values.

use crate::error::{BdmError, Result};
use crate::model::{Clause, Document, Template, TemplateSummary};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Take the `data` member out of a response body.
pub(crate) fn unwrap_data(body: Value) -> Result<Value> {
    match body {
        Value::Object(mut map) => map
            .remove("data")
            .filter(|data| !data.is_null())
            .ok_or_else(|| BdmError::MalformedResponse("response has no data".to_string())),
        _ => Err(BdmError::MalformedResponse(
            "response body is not a JSON object".to_string(),
        )),
    }
}

fn decode<T: DeserializeOwned>(data: Value, what: &str) -> Result<T> {
    serde_json::from_value(data)
        .map_err(|e| BdmError::MalformedResponse(format!("invalid {}: {}", what, e)))
}

/// Clauses from an AI generation response; an empty list is an error.
pub(crate) fn parse_generated_clauses(body: Value) -> Result<Vec<Clause>> {
    let data = unwrap_data(body)?;
    let clauses = match data {
        Value::Object(mut map) => map.remove("clauses"),
        _ => None,
    };

    match clauses {
        Some(Value::Array(items)) if !items.is_empty() => {
            decode(Value::Array(items), "generated clauses")
        }
        _ => Err(BdmError::MalformedResponse(
            "AI did not return valid clauses.".to_string(),
        )),
    }
}

/// A template with its clause list.
pub(crate) fn parse_template(body: Value) -> Result<Template> {
    let data = unwrap_data(body)?;
    if !data.get("clauses").is_some_and(Value::is_array) {
        return Err(BdmError::MalformedResponse(
            "Invalid template data: clauses is not a list".to_string(),
        ));
    }
    decode(data, "template data")
}

pub(crate) fn parse_template_list(body: Value) -> Result<Vec<TemplateSummary>> {
    decode(unwrap_data(body)?, "template list")
}

pub(crate) fn parse_document(body: Value) -> Result<Document> {
    decode(unwrap_data(body)?, "document")
}

/// Best human-readable message for an error response.
///
/// Prefers the body's `message`, then its `error`, then the raw body text,
/// then the status reason.
pub(crate) fn error_message(status: u16, reason: Option<&str>, body: &[u8]) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(Value::String(msg)) = map.get(key)
                && !msg.trim().is_empty()
            {
                return msg.clone();
            }
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if !text.is_empty() && text.len() <= 500 && !text.starts_with('<') {
        return text.to_string();
    }

    match reason {
        Some(reason) => format!("{} {}", status, reason),
        None => format!("HTTP {}", status),
    }
}

/// Map an error status to the matching error variant.
pub(crate) fn status_error(status: u16, reason: Option<&str>, body: &[u8]) -> BdmError {
    let message = error_message(status, reason, body);
    if status == 401 {
        BdmError::AuthError(message)
    } else {
        BdmError::ApiError { status, message }
    }
}
