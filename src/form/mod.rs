//! Document forms.
//!
//! A form walks a user from a clause source to a generated document in two
//! steps:
//!
//! - **Selecting**: pick a template ([`TemplateForm`]) or have clauses
//!   generated ([`AiForm`]).
//! - **Filling**: enter a value for every placeholder found in the clauses,
//!   then submit.
//!
//! A form only enters Filling after its clauses were loaded and scanned, so
//! the placeholder list a user is asked about is exactly the list the filler
//! will substitute. It returns to Selecting on cancel or after a successful
//! submission; a failed request leaves it where it was so the user can retry.
//!
//! Submitting with empty placeholders is allowed after confirmation. The empty
//! markers stay bracketed in the generated document.

mod ai;
mod notify;
mod template;


pub use ai::AiForm;
pub use notify::{Level, Notifier, TerminalNotifier};
pub use template::TemplateForm;

use crate::api::DocumentService;
use crate::error::{BdmError, Result};
use crate::model::{Clause, Document, DocumentDraft};
use crate::placeholder::{PlaceholderValues, extract_from_clauses, fill_clauses};
use std::cell::Cell;
use std::path::{Path, PathBuf};

/// Which step a form is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStep {
    Selecting,
    Filling,
}

/// Result of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Submitted(Document),
    /// The user declined to submit with empty placeholders.
    Declined,
}

/// Collaborators shared by every form.
pub struct FormContext<'a> {
    pub service: &'a dyn DocumentService,
    pub notifier: &'a dyn Notifier,
    /// Where downloaded archives go when no explicit path is given.
    pub download_dir: PathBuf,
}

impl<'a> FormContext<'a> {
    pub fn new(
        service: &'a dyn DocumentService,
        notifier: &'a dyn Notifier,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            service,
            notifier,
            download_dir: download_dir.into(),
        }
    }

    fn save_archive(&self, bytes: &[u8], out: Option<&Path>, default_name: &str) -> Result<PathBuf> {
        crate::fs::save_download(bytes, out, &self.download_dir, default_name)
    }
}

/// Per-form request flag.
///
/// Only one request runs per form; the flag is released when the guard drops,
/// whether the request succeeded or failed.
#[derive(Debug, Default)]
pub(crate) struct InFlight(Cell<bool>);

pub(crate) struct InFlightGuard<'a>(&'a Cell<bool>);

impl InFlight {
    pub(crate) fn begin(&self) -> Result<InFlightGuard<'_>> {
        if self.0.replace(true) {
            return Err(BdmError::Busy);
        }
        Ok(InFlightGuard(&self.0))
    }

    pub(crate) fn is_set(&self) -> bool {
        self.0.get()
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Placeholder entry state for a loaded set of clauses.
#[derive(Debug, Clone, PartialEq)]
pub struct Filling {
    clauses: Vec<Clause>,
    placeholders: Vec<String>,
    values: PlaceholderValues,
    document_name: String,
}

impl Filling {
    /// Scan clauses and start every placeholder out empty.
    pub(crate) fn new(clauses: Vec<Clause>, document_name: String) -> Self {
        let placeholders = extract_from_clauses(&clauses);
        let values = PlaceholderValues::pending_for(placeholders.iter().cloned());
        Self {
            clauses,
            placeholders,
            values,
            document_name,
        }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Placeholder names in first-occurrence order.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    pub fn values(&self) -> &PlaceholderValues {
        &self.values
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    /// Placeholders that still have no value.
    pub fn pending(&self) -> Vec<&str> {
        self.values.pending(&self.placeholders)
    }

    /// Set a placeholder value. Only names found in the clauses are accepted.
    pub(crate) fn set_value(&mut self, name: &str, value: &str) -> Result<()> {
        if !self.placeholders.iter().any(|p| p == name) {
            return Err(BdmError::UserError(format!(
                "unknown placeholder '{}'. Known placeholders: {}",
                name,
                if self.placeholders.is_empty() {
                    "(none)".to_string()
                } else {
                    self.placeholders.join(", ")
                }
            )));
        }
        self.values.set(name, value);
        Ok(())
    }

    pub(crate) fn set_document_name(&mut self, name: &str) {
        self.document_name = name.to_string();
    }

    /// Fill every clause with the current values.
    pub fn draft(&self, document_type: &str) -> DocumentDraft {
        DocumentDraft {
            document_name: self.document_name.clone(),
            document_type: document_type.to_string(),
            clauses: fill_clauses(&self.clauses, &self.values),
        }
    }

    /// Ask for confirmation when placeholders are still empty.
    pub(crate) fn confirm_pending<F>(&self, confirm: F) -> bool
    where
        F: FnOnce(&[&str]) -> bool,
    {
        let pending = self.pending();
        pending.is_empty() || confirm(pending.as_slice())
    }
}

/// Warning shown before submitting with empty placeholders.
pub fn unresolved_warning(pending: &[&str]) -> String {
    format!(
        "Warning: {} placeholders are empty:\n- {}\n\nContinue anyway?",
        pending.len(),
        pending.join("\n- ")
    )
}

/// Current time in milliseconds, used for default names.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
