//! Implementation of the `bdm ai` command.

use super::{collect_values, confirm_unresolved, connect, form_context, print_draft};
use crate::cli::AiArgs;
use crate::config::Config;
use crate::error::Result;
use crate::form::{AiForm, SubmitOutcome, TerminalNotifier};
use crate::model::DOCUMENT_TYPES;
use crate::text::{PREVIEW_LEN, truncate_text};

/// Execute the `bdm ai` command.
///
/// Generates clauses, lists them briefly, applies the given values and saves
/// the document (or prints the filled clauses with `--preview`).
pub fn cmd_ai(args: AiArgs, config: &Config) -> Result<()> {
    let values = collect_values(&args.values)?;

    let document_type = args.document_type.trim();
    if !DOCUMENT_TYPES.contains(&document_type) {
        tracing::info!(
            document_type,
            known = %DOCUMENT_TYPES.join(", "),
            "document type is not one of the common types"
        );
    }

    let service = connect(config)?;
    let notifier = TerminalNotifier;
    let mut form = AiForm::new(form_context(&service, &notifier, config));

    form.generate_clauses(document_type, &args.context)?;

    if let Some(filling) = form.filling() {
        for (i, clause) in filling.clauses().iter().enumerate() {
            println!("  {}. {}", i + 1, truncate_text(&clause.content, PREVIEW_LEN));
        }
        if !filling.placeholders().is_empty() {
            println!();
            println!("Placeholders: {}", filling.placeholders().join(", "));
        }
    }

    for (name, value) in &values {
        form.set_value(name, value)?;
    }
    if let Some(name) = &args.name {
        form.set_document_name(name)?;
    }

    if args.preview {
        print_draft(&form.preview()?);
        return Ok(());
    }

    match form.save(|pending| confirm_unresolved(args.yes, pending))? {
        SubmitOutcome::Submitted(document) => {
            println!("Document ID: {}", document.id);
        }
        SubmitOutcome::Declined => {
            println!("Cancelled; nothing was saved.");
        }
    }
    Ok(())
}
