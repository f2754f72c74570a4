//! Template-driven document form.

use super::{FormContext, FormStep, Filling, InFlight, Level, SubmitOutcome, now_millis};
use crate::api::Upload;
use crate::error::{BdmError, Result};
use crate::model::{BulkTarget, DocumentDraft, GenerateDocumentRequest, Template};
use crate::validate::validate_document;
use std::path::{Path, PathBuf};

/// Generates documents from a stored template.
///
/// The service fills the template's clauses itself from the submitted
/// values; the locally filled draft is available through [`preview`].
///
/// [`preview`]: TemplateForm::preview
pub struct TemplateForm<'a> {
    ctx: FormContext<'a>,
    selected: Option<(Template, Filling)>,
    in_flight: InFlight,
}

impl<'a> TemplateForm<'a> {
    pub fn new(ctx: FormContext<'a>) -> Self {
        Self {
            ctx,
            selected: None,
            in_flight: InFlight::default(),
        }
    }

    pub fn step(&self) -> FormStep {
        match self.selected {
            Some(_) => FormStep::Filling,
            None => FormStep::Selecting,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_set()
    }

    pub fn template(&self) -> Option<&Template> {
        self.selected.as_ref().map(|(t, _)| t)
    }

    pub fn filling(&self) -> Option<&Filling> {
        self.selected.as_ref().map(|(_, f)| f)
    }

    fn reject(&self, err: BdmError) -> BdmError {
        self.ctx.notifier.notify(Level::Error, &err.user_message());
        err
    }

    fn filling_mut(&mut self) -> Result<&mut Filling> {
        self.selected
            .as_mut()
            .map(|(_, f)| f)
            .ok_or_else(|| BdmError::UserError("Please select a template first".to_string()))
    }

    /// Load a template and move to Filling.
    ///
    /// A previous selection is replaced only once the new template has
    /// loaded; on failure the form keeps its current step and values.
    pub fn select_template(&mut self, id: &str) -> Result<()> {
        let _guard = self.in_flight.begin()?;

        let template = match self.ctx.service.get_template(id) {
            Ok(template) => template,
            Err(err) => {
                self.ctx.notifier.notify(
                    Level::Error,
                    &format!("Failed to load template: {}", err.user_message()),
                );
                return Err(err);
            }
        };

        let document_name = format!("{}_{}", template.template_name, now_millis());
        let filling = Filling::new(template.clauses.clone(), document_name);

        tracing::info!(
            template = %template.id,
            placeholders = filling.placeholders().len(),
            "template selected"
        );
        self.ctx.notifier.notify(
            Level::Info,
            &format!(
                "Template selected. Fill {} placeholders.",
                filling.placeholders().len()
            ),
        );

        self.selected = Some((template, filling));
        Ok(())
    }

    pub fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
        self.filling_mut()?.set_value(name, value)
    }

    pub fn set_document_name(&mut self, name: &str) -> Result<()> {
        self.filling_mut()?.set_document_name(name);
        Ok(())
    }

    /// The draft as it would be generated with the current values.
    pub fn preview(&self) -> Result<DocumentDraft> {
        let (template, filling) = self
            .selected
            .as_ref()
            .ok_or_else(|| BdmError::UserError("Please select a template first".to_string()))?;
        Ok(filling.draft(&template.document_type))
    }

    /// Submit the document.
    ///
    /// `confirm` is asked only when placeholders are still empty; declining
    /// leaves the form in Filling. A blank document name falls back to
    /// `<template_name>_<millis>`.
    pub fn generate<F>(&mut self, confirm: F) -> Result<SubmitOutcome>
    where
        F: FnOnce(&[&str]) -> bool,
    {
        let (template, filling) = match &self.selected {
            Some(selected) => selected,
            None => {
                return Err(self.reject(BdmError::UserError(
                    "Please select a template first".to_string(),
                )));
            }
        };

        if !filling.confirm_pending(confirm) {
            return Ok(SubmitOutcome::Declined);
        }

        let document_name = if filling.document_name().trim().is_empty() {
            format!("{}_{}", template.template_name, now_millis())
        } else {
            filling.document_name().to_string()
        };
        validate_document(&document_name, &template.document_type)
            .into_result()
            .map_err(|e| self.reject(e))?;

        let draft = filling.draft(&template.document_type);
        tracing::debug!(clauses = draft.clauses.len(), "submitting template document");

        let request = GenerateDocumentRequest::FromTemplate {
            template_id: template.id.clone(),
            document_name,
            document_type: template.document_type.clone(),
            context: filling.values().clone(),
        };

        let _guard = self.in_flight.begin()?;
        match self.ctx.service.generate_document(&request) {
            Ok(document) => {
                self.ctx.notifier.notify(
                    Level::Success,
                    &format!("Document '{}' generated.", request.document_name()),
                );
                tracing::info!(document = %document.id, "document generated from template");
                self.selected = None;
                Ok(SubmitOutcome::Submitted(document))
            }
            Err(err) => {
                self.ctx.notifier.notify(
                    Level::Error,
                    &format!("Generation failed: {}", err.user_message()),
                );
                Err(err)
            }
        }
    }

    /// Generate one document per spreadsheet row for the selected template.
    ///
    /// The returned archive is saved to `out`, or to
    /// `bulk_documents_<millis>.zip` in the download directory.
    pub fn bulk_generate(&mut self, spreadsheet: &Upload, out: Option<&Path>) -> Result<PathBuf> {
        let template_id = match &self.selected {
            Some((template, _)) => template.id.to_string(),
            None => {
                return Err(self.reject(BdmError::UserError(
                    "Please select a template first".to_string(),
                )));
            }
        };

        let _guard = self.in_flight.begin()?;
        bulk_generate(&self.ctx, BulkTarget::Template(template_id), spreadsheet, out)
    }

    /// Drop the selection and return to Selecting.
    pub fn cancel(&mut self) {
        self.selected = None;
    }
}

/// Shared bulk flow for both form variants.
pub(super) fn bulk_generate(
    ctx: &FormContext<'_>,
    target: BulkTarget,
    spreadsheet: &Upload,
    out: Option<&Path>,
) -> Result<PathBuf> {
    let (start, done) = match target {
        BulkTarget::Template(_) => (
            "Starting bulk generation. Please wait...",
            "Bulk documents generated successfully.",
        ),
        BulkTarget::DocumentType(_) => (
            "Starting AI bulk generation. Please wait...",
            "AI bulk documents generated successfully.",
        ),
    };
    ctx.notifier.notify(Level::Info, start);

    let saved = ctx
        .service
        .bulk_generate(&target, spreadsheet)
        .and_then(|archive| ctx.save_archive(&archive, out, &target.archive_name(now_millis())));

    match saved {
        Ok(path) => {
            ctx.notifier.notify(
                Level::Success,
                &format!("{} ZIP saved to {}", done, path.display()),
            );
            Ok(path)
        }
        Err(err) => {
            ctx.notifier.notify(Level::Error, &err.user_message());
            Err(err)
        }
    }
}
