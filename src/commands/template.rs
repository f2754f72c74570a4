//! Implementation of `bdm templates` and `bdm template`.

use super::{collect_values, confirm_unresolved, connect, form_context, print_draft};
use crate::api::DocumentService;
use crate::cli::TemplateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::form::{SubmitOutcome, TemplateForm, TerminalNotifier};
use crate::text::format_date;

/// Execute the `bdm templates` command.
pub fn cmd_templates(config: &Config) -> Result<()> {
    let service = connect(config)?;
    let templates = service.list_templates()?;

    if templates.is_empty() {
        println!("No templates available.");
        return Ok(());
    }

    println!("Templates ({}):", templates.len());
    println!();
    for template in &templates {
        let created = template
            .created_at
            .as_deref()
            .map(|raw| format_date(raw).unwrap_or_else(|| raw.to_string()));

        print!(
            "  {:<8} {:<32} {:<16}",
            template.id, template.template_name, template.document_type
        );
        if let Some(created) = created {
            print!(" {}", created);
        }
        if template.is_ai_generated {
            print!(" [AI]");
        }
        println!();
    }
    Ok(())
}

/// Execute the `bdm template` command.
///
/// Values are checked locally before the template is fetched, then applied
/// one by one so an unknown placeholder name is rejected with the list of
/// known names.
pub fn cmd_template(args: TemplateArgs, config: &Config) -> Result<()> {
    let values = collect_values(&args.values)?;

    let service = connect(config)?;
    let notifier = TerminalNotifier;
    let mut form = TemplateForm::new(form_context(&service, &notifier, config));

    form.select_template(&args.template_id)?;
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

    match form.generate(|pending| confirm_unresolved(args.yes, pending))? {
        SubmitOutcome::Submitted(document) => {
            println!("Document ID: {}", document.id);
        }
        SubmitOutcome::Declined => {
            println!("Cancelled; nothing was generated.");
        }
    }
    Ok(())
}
