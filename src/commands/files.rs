//! Implementation of `bdm bulk` and `bdm download`.

use super::{connect, form_context};
use crate::api::{DocumentService, Upload};
use crate::cli::{BulkArgs, DownloadArgs};
use crate::config::Config;
use crate::error::{BdmError, Result};
use crate::form::{AiForm, TemplateForm, TerminalNotifier};
use crate::fs::{read_bytes, save_download};
use std::path::Path;

/// Execute the `bdm bulk` command.
///
/// The spreadsheet is uploaded as-is; the service parses it and generates
/// one document per row.
pub fn cmd_bulk(args: BulkArgs, config: &Config) -> Result<()> {
    let spreadsheet = load_upload(&args.spreadsheet)?;

    let service = connect(config)?;
    let notifier = TerminalNotifier;
    let ctx = form_context(&service, &notifier, config);

    let path = match (&args.template_id, &args.document_type) {
        (Some(template_id), None) => {
            let mut form = TemplateForm::new(ctx);
            form.select_template(template_id)?;
            form.bulk_generate(&spreadsheet, args.out.as_deref())?
        }
        (None, Some(document_type)) => {
            let mut form = AiForm::new(ctx);
            form.bulk_generate(document_type, &spreadsheet, args.out.as_deref())?
        }
        _ => {
            return Err(BdmError::UserError(
                "specify exactly one of --template-id or --document-type".to_string(),
            ));
        }
    };

    println!("{}", path.display());
    Ok(())
}

/// Execute the `bdm download` command.
pub fn cmd_download(args: DownloadArgs, config: &Config) -> Result<()> {
    let service = connect(config)?;
    let pdf = service.download_pdf(&args.document_id)?;

    let default_name = format!("{}.pdf", args.document_id.trim());
    let path = save_download(
        &pdf,
        args.out.as_deref(),
        &config.download_dir(),
        &default_name,
    )?;

    println!("{}", path.display());
    Ok(())
}

fn load_upload(path: &Path) -> Result<Upload> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| BdmError::UserError(format!("invalid spreadsheet path '{}'", path.display())))?
        .to_string();

    let is_spreadsheet = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("xlsx") || e.eq_ignore_ascii_case("xls"));
    if !is_spreadsheet {
        return Err(BdmError::ValidationError(format!(
            "'{}' is not an Excel file (.xlsx or .xls)",
            path.display()
        )));
    }

    Ok(Upload {
        file_name,
        bytes: read_bytes(path)?,
    })
}
