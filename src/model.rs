//! Data model shared with the document service.
//!
//! The service is the source of truth for clauses, templates and documents;
//! these types keep any field they do not know about in `extra` so a clause
//! can be filled and sent back without losing server-side attributes.

use crate::placeholder::PlaceholderValues;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Document types the service knows templates for.
///
/// Advisory only: the service accepts any non-empty document type.
pub const DOCUMENT_TYPES: &[&str] = &["offer_letter", "nda", "contract", "agreement", "general"];

/// How a clause came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseType {
    /// Authored directly or generated.
    Normal,
    /// Produced by merging other clauses.
    Merged,
    /// Marked as a reusable sample.
    Sample,
}

impl ClauseType {
    /// Parse a clause type from its wire name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "normal" => Some(Self::Normal),
            "merged" => Some(Self::Merged),
            "sample" => Some(Self::Sample),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Merged => "merged",
            Self::Sample => "sample",
        }
    }
}

/// A record id as the service sent it.
///
/// Ids are numbers or strings depending on the backing store and are sent
/// back in the same form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Num(i64),
    Str(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => f.pad(&n.to_string()),
            Self::Str(s) => f.pad(s),
        }
    }
}

impl From<i64> for Id {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Id {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Num(n) => n.to_string() == other,
            Self::Str(s) => s == other,
        }
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// A unit of document text, possibly containing `[Name]` markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,

    /// Clause text. A missing or null content is read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Wire value of the clause type; kept as text since the service may add types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clause_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Any other fields the service sent.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Clause {
    /// Create a clause with only content set.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// The parsed clause type, when it is one this client knows.
    pub fn kind(&self) -> Option<ClauseType> {
        self.clause_type.as_deref().and_then(ClauseType::from_str)
    }
}

/// A named, reusable ordered collection of clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: Id,
    pub template_name: String,
    pub document_type: String,
    pub clauses: Vec<Clause>,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A template as it appears in list results, without clauses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: Id,
    pub template_name: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub is_ai_generated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A generated document as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Id,
    #[serde(default)]
    pub document_name: Option<String>,
    #[serde(default)]
    pub document_type: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Clauses sent as pre-filled content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentJson {
    pub clauses: Vec<Clause>,
}

/// Ordered clauses with placeholders resolved, built right before submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentDraft {
    pub document_name: String,
    pub document_type: String,
    pub clauses: Vec<Clause>,
}

/// Body of a document generation request.
///
/// The template path sends raw values and lets the service fill its own
/// clauses; the clause path sends content that was filled locally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GenerateDocumentRequest {
    FromTemplate {
        template_id: Id,
        document_name: String,
        document_type: String,
        context: PlaceholderValues,
    },
    FromClauses {
        document_name: String,
        document_type: String,
        content_json: ContentJson,
        variables: PlaceholderValues,
    },
}

impl GenerateDocumentRequest {
    pub fn document_name(&self) -> &str {
        match self {
            Self::FromTemplate { document_name, .. } | Self::FromClauses { document_name, .. } => {
                document_name
            }
        }
    }
}

/// What a bulk generation run produces documents from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BulkTarget {
    /// Fill an existing template once per spreadsheet row.
    Template(String),
    /// Generate clauses with AI once per spreadsheet row.
    DocumentType(String),
}

impl BulkTarget {
    /// Default archive file name for a run started at `millis`.
    pub fn archive_name(&self, millis: i64) -> String {
        match self {
            Self::Template(_) => format!("bulk_documents_{}.zip", millis),
            Self::DocumentType(_) => format!("AI_Bulk_Documents_{}.zip", millis),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clause_keeps_unknown_fields() {
        let raw = json!({
            "id": 7,
            "content": "Hello [Name]",
            "category": "intro",
            "clause_type": "normal",
            "is_sample": false,
            "order": 1
        });
        let clause: Clause = serde_json::from_value(raw).unwrap();
        assert_eq!(clause.id, Some(Id::Num(7)));
        assert_eq!(clause.kind(), Some(ClauseType::Normal));
        assert_eq!(clause.extra.get("order"), Some(&json!(1)));

        let back = serde_json::to_value(&clause).unwrap();
        assert_eq!(back["id"], json!(7));
        assert_eq!(back["is_sample"], json!(false));
        assert_eq!(back["content"], json!("Hello [Name]"));
    }

    #[test]
    fn test_ids_keep_their_wire_form() {
        let numeric: Clause = serde_json::from_value(json!({"id": 7, "content": "x"})).unwrap();
        assert_eq!(
            serde_json::to_value(&numeric).unwrap(),
            json!({"id": 7, "content": "x"})
        );

        let text: Clause = serde_json::from_value(json!({"id": "c-7", "content": "x"})).unwrap();
        assert_eq!(text.id, Some(Id::from("c-7")));
        assert_eq!(serde_json::to_value(&text).unwrap()["id"], json!("c-7"));

        let missing: Clause = serde_json::from_value(json!({"id": null, "content": "x"})).unwrap();
        assert_eq!(missing.id, None);
        assert!(serde_json::to_value(&missing).unwrap().get("id").is_none());
    }

    #[test]
    fn test_id_display_and_compare() {
        assert_eq!(Id::Num(42).to_string(), "42");
        assert_eq!(format!("{:<4}|", Id::from("ab")), "ab  |");
        assert_eq!(Id::Num(3), "3");
        assert_eq!(Id::from("tpl-1"), "tpl-1");
    }

    #[test]
    fn test_clause_null_content_is_empty() {
        let clause: Clause = serde_json::from_value(json!({"content": null})).unwrap();
        assert_eq!(clause.content, "");

        let clause: Clause = serde_json::from_value(json!({})).unwrap();
        assert_eq!(clause.content, "");
    }

    #[test]
    fn test_template_requires_clause_array() {
        let ok = json!({
            "id": "abc",
            "template_name": "Offer",
            "document_type": "offer_letter",
            "clauses": [{"content": "[Name]"}]
        });
        let template: Template = serde_json::from_value(ok).unwrap();
        assert_eq!(template.clauses.len(), 1);
        assert!(!template.is_ai_generated);

        let bad = json!({
            "id": "abc",
            "template_name": "Offer",
            "document_type": "offer_letter",
            "clauses": "not a list"
        });
        assert!(serde_json::from_value::<Template>(bad).is_err());
    }

    #[test]
    fn test_template_request_shape() {
        let request = GenerateDocumentRequest::FromTemplate {
            template_id: Id::Num(12),
            document_name: "Offer_1".to_string(),
            document_type: "offer_letter".to_string(),
            context: PlaceholderValues::from_pairs([("Name", "Alice")]),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "template_id": 12,
                "document_name": "Offer_1",
                "document_type": "offer_letter",
                "context": {"Name": "Alice"}
            })
        );
    }

    #[test]
    fn test_clause_request_shape() {
        let request = GenerateDocumentRequest::FromClauses {
            document_name: "nda_AI_1".to_string(),
            document_type: "nda".to_string(),
            content_json: ContentJson {
                clauses: vec![Clause::new("Hello Alice")],
            },
            variables: PlaceholderValues::from_pairs([("Name", "Alice")]),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "document_name": "nda_AI_1",
                "document_type": "nda",
                "content_json": {"clauses": [{"content": "Hello Alice"}]},
                "variables": {"Name": "Alice"}
            })
        );
        assert_eq!(request.document_name(), "nda_AI_1");
    }

    #[test]
    fn test_archive_names() {
        assert_eq!(
            BulkTarget::Template("1".to_string()).archive_name(42),
            "bulk_documents_42.zip"
        );
        assert_eq!(
            BulkTarget::DocumentType("nda".to_string()).archive_name(42),
            "AI_Bulk_Documents_42.zip"
        );
    }

    #[test]
    fn test_clause_type_names() {
        for kind in [ClauseType::Normal, ClauseType::Merged, ClauseType::Sample] {
            assert_eq!(ClauseType::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(ClauseType::from_str("other"), None);
    }
}
