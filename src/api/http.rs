//! Blocking HTTP implementation of [`DocumentService`].

use super::config::{ApiConfig, path_segment};
use super::envelope;
use super::{AiClauseRequest, DocumentService, Upload};
use crate::error::{BdmError, Result};
use crate::model::{
    BulkTarget, Clause, Document, GenerateDocumentRequest, Template, TemplateSummary,
};
use reqwest::blocking::{Client, ClientBuilder, RequestBuilder, Response, multipart};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde_json::Value;
use std::time::Instant;

/// Document service client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpDocumentService {
    client: Client,
    config: ApiConfig,
}

impl HttpDocumentService {
    /// Build a client from explicit settings.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::with_builder(config, Client::builder())
    }

    /// Build a client on top of a preconfigured builder.
    pub(crate) fn with_builder(config: ApiConfig, builder: ClientBuilder) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = builder
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| BdmError::TransportError(format!("failed to build http client: {}", e)))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and fail on a non-success status.
    fn send(&self, label: &str, request: RequestBuilder) -> Result<Response> {
        let started = Instant::now();
        let response = self.authorized(request).send().map_err(|e| {
            tracing::warn!(request = label, error = %e, "request failed");
            BdmError::TransportError(format!(
                "could not reach the document service at {} ({})",
                self.config.base_url, e
            ))
        })?;

        let status = response.status();
        tracing::debug!(
            request = label,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request finished"
        );

        if status.is_success() {
            return Ok(response);
        }

        let reason = status.canonical_reason();
        let body = response.bytes().map(|b| b.to_vec()).unwrap_or_default();
        let err = envelope::status_error(status.as_u16(), reason, &body);
        tracing::warn!(request = label, status = status.as_u16(), error = %err, "service returned an error");
        Err(err)
    }

    fn json(&self, label: &str, request: RequestBuilder) -> Result<Value> {
        self.send(label, request)?
            .json::<Value>()
            .map_err(|e| BdmError::MalformedResponse(format!("response is not valid JSON: {}", e)))
    }

    fn binary(&self, label: &str, request: RequestBuilder) -> Result<Vec<u8>> {
        let bytes = self
            .send(label, request)?
            .bytes()
            .map_err(|e| BdmError::TransportError(format!("failed to read response body: {}", e)))?;
        Ok(bytes.to_vec())
    }
}

impl DocumentService for HttpDocumentService {
    fn generate_clauses_ai(&self, request: &AiClauseRequest) -> Result<Vec<Clause>> {
        let url = self.config.url("/clauses/generate-ai");
        let body = self.json("generate_clauses_ai", self.client.post(url).json(request))?;
        envelope::parse_generated_clauses(body)
    }

    fn get_template(&self, id: &str) -> Result<Template> {
        let id = path_segment("template", id)?;
        let url = self.config.url(&format!("/templates/{}", id));
        let body = self.json("get_template", self.client.get(url))?;
        envelope::parse_template(body)
    }

    fn list_templates(&self) -> Result<Vec<TemplateSummary>> {
        let url = self.config.url("/templates");
        let body = self.json("list_templates", self.client.get(url))?;
        envelope::parse_template_list(body)
    }

    fn generate_document(&self, request: &GenerateDocumentRequest) -> Result<Document> {
        let url = self.config.url("/documents/generate");
        let body = self.json("generate_document", self.client.post(url).json(request))?;
        envelope::parse_document(body)
    }

    fn bulk_generate(&self, target: &BulkTarget, spreadsheet: &Upload) -> Result<Vec<u8>> {
        let part = multipart::Part::bytes(spreadsheet.bytes.clone())
            .file_name(spreadsheet.file_name.clone());
        let form = multipart::Form::new().part("excel_file", part);

        let (url, form) = match target {
            BulkTarget::Template(id) => {
                let id = path_segment("template", id)?;
                (self.config.url(&format!("/documents/bulk-generate/{}", id)), form)
            }
            BulkTarget::DocumentType(document_type) => (
                self.config.url("/documents/ai-bulk-generate"),
                form.text("document_type", document_type.clone()),
            ),
        };

        self.binary("bulk_generate", self.client.post(url).multipart(form))
    }

    fn download_pdf(&self, document_id: &str) -> Result<Vec<u8>> {
        let id = path_segment("document", document_id)?;
        let url = self.config.url(&format!("/documents/{}/download", id));
        self.binary("download_pdf", self.client.get(url))
    }
}
