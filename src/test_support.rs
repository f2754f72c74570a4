use crate::api::{AiClauseRequest, DocumentService, Upload};
use crate::error::{BdmError, Result};
use crate::form::{Level, Notifier};
use crate::model::{
    BulkTarget, Clause, Document, GenerateDocumentRequest, Template, TemplateSummary,
};
use serde_json::Map;
use std::cell::RefCell;

/// In-memory document service that records every call.
///
/// Responses are configured per operation; an unset response fails with a
/// service error so tests notice unexpected calls.
#[derive(Default)]
pub(crate) struct MockService {
    pub(crate) template: Option<Template>,
    pub(crate) ai_clauses: Option<Vec<Clause>>,
    pub(crate) archive: Option<Vec<u8>>,
    pub(crate) fail_generate: Option<String>,
    /// Template loads beyond this many fail.
    pub(crate) template_load_limit: Option<usize>,
    pub(crate) calls: RefCell<Vec<String>>,
    pub(crate) ai_requests: RefCell<Vec<AiClauseRequest>>,
    pub(crate) documents: RefCell<Vec<GenerateDocumentRequest>>,
    pub(crate) bulk_targets: RefCell<Vec<BulkTarget>>,
}

impl MockService {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

fn unavailable() -> BdmError {
    BdmError::ApiError {
        status: 503,
        message: "service unavailable".to_string(),
    }
}

impl DocumentService for MockService {
    fn generate_clauses_ai(&self, request: &AiClauseRequest) -> Result<Vec<Clause>> {
        self.record("generate_clauses_ai");
        self.ai_requests.borrow_mut().push(request.clone());
        self.ai_clauses.clone().ok_or_else(unavailable)
    }

    fn get_template(&self, id: &str) -> Result<Template> {
        self.record(&format!("get_template:{}", id));
        let loads = self
            .calls
            .borrow()
            .iter()
            .filter(|c| c.starts_with("get_template:"))
            .count();
        if self.template_load_limit.is_some_and(|limit| loads > limit) {
            return Err(unavailable());
        }
        self.template.clone().ok_or_else(unavailable)
    }

    fn list_templates(&self) -> Result<Vec<TemplateSummary>> {
        self.record("list_templates");
        Ok(self
            .template
            .iter()
            .map(|t| TemplateSummary {
                id: t.id.clone(),
                template_name: t.template_name.clone(),
                document_type: t.document_type.clone(),
                is_ai_generated: t.is_ai_generated,
                created_at: None,
            })
            .collect())
    }

    fn generate_document(&self, request: &GenerateDocumentRequest) -> Result<Document> {
        self.record("generate_document");
        if let Some(message) = &self.fail_generate {
            return Err(BdmError::ApiError {
                status: 500,
                message: message.clone(),
            });
        }
        self.documents.borrow_mut().push(request.clone());
        Ok(Document {
            id: format!("doc-{}", self.documents.borrow().len()).into(),
            document_name: Some(request.document_name().to_string()),
            document_type: None,
            extra: Map::new(),
        })
    }

    fn bulk_generate(&self, target: &BulkTarget, _spreadsheet: &Upload) -> Result<Vec<u8>> {
        self.record("bulk_generate");
        self.bulk_targets.borrow_mut().push(target.clone());
        self.archive.clone().ok_or_else(unavailable)
    }

    fn download_pdf(&self, document_id: &str) -> Result<Vec<u8>> {
        self.record(&format!("download_pdf:{}", document_id));
        Ok(b"%PDF-1.7".to_vec())
    }
}

pub(crate) fn template_with(clauses: &[&str]) -> Template {
    Template {
        id: "tpl-1".into(),
        template_name: "Offer".to_string(),
        document_type: "offer_letter".to_string(),
        clauses: clauses.iter().map(|c| Clause::new(*c)).collect(),
        is_ai_generated: false,
        extra: Map::new(),
    }
}

pub(crate) fn spreadsheet() -> Upload {
    Upload {
        file_name: "rows.xlsx".to_string(),
        bytes: b"fake-xlsx".to_vec(),
    }
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn messages(&self) -> Vec<(Level, String)> {
        self.messages.borrow().clone()
    }

    pub(crate) fn last(&self) -> Option<(Level, String)> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}
