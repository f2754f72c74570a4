//! AI-driven document form.

use super::template::bulk_generate;
use super::{FormContext, FormStep, Filling, InFlight, Level, SubmitOutcome, now_millis};
use crate::api::{AiClauseRequest, Upload};
use crate::error::{BdmError, Result};
use crate::model::{BulkTarget, ContentJson, DocumentDraft, GenerateDocumentRequest};
use crate::validate::{parse_initial_context, validate_document};
use std::path::{Path, PathBuf};

struct Generated {
    document_type: String,
    filling: Filling,
}

/// Generates clauses with AI, then fills and submits them as content.
///
/// Unlike the template flow, the filled clauses are sent to the service
/// verbatim together with the raw values.
pub struct AiForm<'a> {
    ctx: FormContext<'a>,
    generated: Option<Generated>,
    in_flight: InFlight,
}

impl<'a> AiForm<'a> {
    pub fn new(ctx: FormContext<'a>) -> Self {
        Self {
            ctx,
            generated: None,
            in_flight: InFlight::default(),
        }
    }

    pub fn step(&self) -> FormStep {
        match self.generated {
            Some(_) => FormStep::Filling,
            None => FormStep::Selecting,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_set()
    }

    pub fn document_type(&self) -> Option<&str> {
        self.generated.as_ref().map(|g| g.document_type.as_str())
    }

    pub fn filling(&self) -> Option<&Filling> {
        self.generated.as_ref().map(|g| &g.filling)
    }

    fn filling_mut(&mut self) -> Result<&mut Filling> {
        self.generated
            .as_mut()
            .map(|g| &mut g.filling)
            .ok_or_else(|| BdmError::UserError("No AI clauses generated yet.".to_string()))
    }

    fn reject(&self, err: BdmError) -> BdmError {
        self.ctx.notifier.notify(Level::Error, &err.user_message());
        err
    }

    /// Generate clauses for a document type and move to Filling.
    ///
    /// The document type must be non-blank and `raw_context`, when given,
    /// must be a JSON object; both are checked before any request is sent.
    pub fn generate_clauses(&mut self, document_type: &str, raw_context: &str) -> Result<()> {
        let document_type = document_type.trim();
        if document_type.is_empty() {
            return Err(self.reject(BdmError::ValidationError(
                "Please enter document type".to_string(),
            )));
        }
        let context = parse_initial_context(raw_context).map_err(|e| self.reject(e))?;

        let request = AiClauseRequest {
            document_type: document_type.to_string(),
            category: document_type.to_string(),
            context,
        };

        let _guard = self.in_flight.begin()?;
        let clauses = match self.ctx.service.generate_clauses_ai(&request) {
            Ok(clauses) if !clauses.is_empty() => clauses,
            Ok(_) => {
                let err = BdmError::MalformedResponse("AI did not return valid clauses.".to_string());
                self.ctx.notifier.notify(
                    Level::Error,
                    &format!("Failed to generate clauses: {}", err.user_message()),
                );
                return Err(err);
            }
            Err(err) => {
                self.ctx.notifier.notify(
                    Level::Error,
                    &format!("Failed to generate clauses: {}", err.user_message()),
                );
                return Err(err);
            }
        };

        let clause_count = clauses.len();
        let filling = Filling::new(clauses, format!("{}_AI_{}", document_type, now_millis()));

        tracing::info!(
            document_type,
            clauses = clause_count,
            placeholders = filling.placeholders().len(),
            "AI clauses generated"
        );
        self.ctx.notifier.notify(
            Level::Success,
            &format!(
                "AI generated {} clauses. Fill {} placeholders.",
                clause_count,
                filling.placeholders().len()
            ),
        );

        self.generated = Some(Generated {
            document_type: document_type.to_string(),
            filling,
        });
        Ok(())
    }

    pub fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
        self.filling_mut()?.set_value(name, value)
    }

    pub fn set_document_name(&mut self, name: &str) -> Result<()> {
        self.filling_mut()?.set_document_name(name);
        Ok(())
    }

    /// The filled clauses as they would be saved.
    pub fn preview(&self) -> Result<DocumentDraft> {
        match &self.generated {
            Some(generated) => Ok(generated.filling.draft(&generated.document_type)),
            None => Err(self.reject(BdmError::UserError(
                "No AI clauses generated yet.".to_string(),
            ))),
        }
    }

    /// Fill the clauses and save the document.
    ///
    /// `confirm` is asked only when placeholders are still empty; declining
    /// leaves the form in Filling. Success resets the form.
    pub fn save<F>(&mut self, confirm: F) -> Result<SubmitOutcome>
    where
        F: FnOnce(&[&str]) -> bool,
    {
        let generated = match &self.generated {
            Some(generated) if !generated.filling.document_name().trim().is_empty() => generated,
            _ => {
                return Err(self.reject(BdmError::ValidationError(
                    "Missing document name or generated clauses.".to_string(),
                )));
            }
        };

        if !generated.filling.confirm_pending(confirm) {
            return Ok(SubmitOutcome::Declined);
        }

        let draft = generated.filling.draft(&generated.document_type);
        validate_document(&draft.document_name, &draft.document_type)
            .into_result()
            .map_err(|e| self.reject(e))?;

        let request = GenerateDocumentRequest::FromClauses {
            document_name: draft.document_name,
            document_type: draft.document_type,
            content_json: ContentJson {
                clauses: draft.clauses,
            },
            variables: generated.filling.values().clone(),
        };

        let _guard = self.in_flight.begin()?;
        match self.ctx.service.generate_document(&request) {
            Ok(document) => {
                self.ctx.notifier.notify(
                    Level::Success,
                    &format!("Document '{}' saved.", request.document_name()),
                );
                tracing::info!(document = %document.id, "document generated from AI clauses");
                self.generated = None;
                Ok(SubmitOutcome::Submitted(document))
            }
            Err(err) => {
                self.ctx.notifier.notify(
                    Level::Error,
                    &format!("Failed to save: {}", err.user_message()),
                );
                Err(err)
            }
        }
    }

    /// Generate one document per spreadsheet row, with AI, for a document type.
    ///
    /// Available in either step. The archive is saved to `out`, or to
    /// `AI_Bulk_Documents_<millis>.zip` in the download directory.
    pub fn bulk_generate(
        &mut self,
        document_type: &str,
        spreadsheet: &Upload,
        out: Option<&Path>,
    ) -> Result<PathBuf> {
        let document_type = document_type.trim();
        if document_type.is_empty() {
            return Err(self.reject(BdmError::ValidationError(
                "Please enter document type before AI bulk generation.".to_string(),
            )));
        }

        let _guard = self.in_flight.begin()?;
        bulk_generate(
            &self.ctx,
            BulkTarget::DocumentType(document_type.to_string()),
            spreadsheet,
            out,
        )
    }

    /// Discard generated clauses and values.
    pub fn reset(&mut self) {
        self.generated = None;
    }
}
