//! Remote document service.
//!
//! Clause generation, template storage, document rendering and bulk
//! spreadsheet processing all happen on the service. This module defines the
//! capability the forms depend on ([`DocumentService`]) and the HTTP client
//! that implements it ([`HttpDocumentService`]).
//!
//! # Wire format
//!
//! JSON responses wrap their payload in `{"data": ...}`. Error responses may
//! carry a `message` or `error` string, which is preferred over the status
//! text when reporting a failure.

mod config;
mod envelope;
mod http;


pub use config::ApiConfig;
pub use http::HttpDocumentService;

use crate::error::Result;
use crate::model::{BulkTarget, Clause, Document, GenerateDocumentRequest, Template, TemplateSummary};
use serde::Serialize;
use serde_json::{Map, Value};

/// Body of an AI clause generation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiClauseRequest {
    pub document_type: String,
    pub category: String,
    pub context: Map<String, Value>,
}

/// A file to upload, with the name the service will see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Operations the document service offers to this client.
///
/// Implementations must enforce the response contracts: AI generation with
/// no clauses and templates whose clauses are not a list are errors, never
/// empty successes.
pub trait DocumentService {
    /// Generate clauses for a document type with AI.
    fn generate_clauses_ai(&self, request: &AiClauseRequest) -> Result<Vec<Clause>>;

    /// Load a template with its clauses.
    fn get_template(&self, id: &str) -> Result<Template>;

    /// List available templates.
    fn list_templates(&self) -> Result<Vec<TemplateSummary>>;

    /// Generate a single document.
    fn generate_document(&self, request: &GenerateDocumentRequest) -> Result<Document>;

    /// Generate one document per spreadsheet row; returns a ZIP archive.
    fn bulk_generate(&self, target: &BulkTarget, spreadsheet: &Upload) -> Result<Vec<u8>>;

    /// Download the rendered PDF of a document.
    fn download_pdf(&self, document_id: &str) -> Result<Vec<u8>>;
}
