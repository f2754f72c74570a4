//! Command implementations for bdm.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the helpers they share: collecting placeholder
//! values from arguments, asking for confirmation, and printing drafts.

mod ai;
mod files;
mod local;
mod template;

use crate::api::HttpDocumentService;
use crate::cli::{Command, ValueArgs};
use crate::config::Config;
use crate::error::{BdmError, Result};
use crate::form::{FormContext, Notifier, unresolved_warning};
use crate::model::DocumentDraft;
use serde_json::Value;
use std::io::{BufRead, Write};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Placeholders(args) => local::cmd_placeholders(args),
        Command::Fill(args) => local::cmd_fill(args),
        Command::Templates => template::cmd_templates(config),
        Command::Template(args) => template::cmd_template(args, config),
        Command::Ai(args) => ai::cmd_ai(args, config),
        Command::Bulk(args) => files::cmd_bulk(args, config),
        Command::Download(args) => files::cmd_download(args, config),
        Command::Config => cmd_config(config),
    }
}

/// Execute the `bdm config` command.
fn cmd_config(config: &Config) -> Result<()> {
    print!("{}", config.to_yaml()?);
    Ok(())
}

fn connect(config: &Config) -> Result<HttpDocumentService> {
    HttpDocumentService::new(config.api_config())
}

fn form_context<'a>(
    service: &'a HttpDocumentService,
    notifier: &'a dyn Notifier,
    config: &Config,
) -> FormContext<'a> {
    FormContext::new(service, notifier, config.download_dir())
}

/// Collect placeholder values: the `--values` file first, then `--set` pairs.
pub(crate) fn collect_values(args: &ValueArgs) -> Result<Vec<(String, String)>> {
    let mut values = Vec::new();

    if let Some(path) = &args.values {
        let raw = crate::fs::read_input(path)?;
        values.extend(parse_values_json(&raw).map_err(|e| match e {
            BdmError::ValidationError(msg) => {
                BdmError::ValidationError(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })?);
    }

    for pair in &args.set {
        values.push(parse_set(pair)?);
    }

    Ok(values)
}

/// Parse `NAME=VALUE`. The name is trimmed; the value is kept verbatim.
pub(crate) fn parse_set(pair: &str) -> Result<(String, String)> {
    match pair.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(BdmError::UserError(format!(
            "invalid --set '{}': expected NAME=VALUE",
            pair
        ))),
    }
}

/// Parse a JSON object of placeholder values.
///
/// Numbers and booleans are accepted and converted to text; null means empty.
pub(crate) fn parse_values_json(raw: &str) -> Result<Vec<(String, String)>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| BdmError::ValidationError(format!("invalid JSON in values file: {}", e)))?;

    let Value::Object(map) = value else {
        return Err(BdmError::ValidationError(
            "values file must contain a JSON object".to_string(),
        ));
    };

    map.into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s,
                Value::Null => String::new(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => {
                    return Err(BdmError::ValidationError(format!(
                        "value for '{}' must be text, a number or a boolean",
                        name
                    )));
                }
            };
            Ok((name, text))
        })
        .collect()
}

/// Ask whether to submit with empty placeholders.
///
/// `--yes` skips the question. End of input counts as "no".
pub(crate) fn confirm_unresolved(assume_yes: bool, pending: &[&str]) -> bool {
    if assume_yes {
        tracing::info!(pending = pending.len(), "submitting with empty placeholders");
        return true;
    }

    eprint!("{} [y/N] ", unresolved_warning(pending));
    let _ = std::io::stderr().flush();

    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(0) | Err(_) => false,
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
    }
}

/// Print a filled draft clause by clause.
pub(crate) fn print_draft(draft: &DocumentDraft) {
    println!("================================================================================");
    println!("{} [{}]", draft.document_name, draft.document_type);
    println!("================================================================================");

    for (i, clause) in draft.clauses.iter().enumerate() {
        println!();
        let label = clause
            .title
            .as_deref()
            .or(clause.category.as_deref())
            .unwrap_or("Clause");
        match clause.kind() {
            Some(kind) => println!("{}. {} ({})", i + 1, label, kind.as_str()),
            None => println!("{}. {}", i + 1, label),
        }
        println!("{}", clause.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            parse_set("Start Date=2024-01-01").unwrap(),
            ("Start Date".to_string(), "2024-01-01".to_string())
        );
        assert_eq!(
            parse_set(" Name =Alice=Bob").unwrap(),
            ("Name".to_string(), "Alice=Bob".to_string())
        );
        assert_eq!(parse_set("Empty=").unwrap(), ("Empty".to_string(), String::new()));
        assert!(parse_set("novalue").is_err());
        assert!(parse_set("=value").is_err());
    }

    #[test]
    fn test_parse_values_json() {
        let values =
            parse_values_json(r#"{"Name": "Alice", "Amount": 50000, "Remote": true, "Note": null}"#)
                .unwrap();
        assert!(values.contains(&("Name".to_string(), "Alice".to_string())));
        assert!(values.contains(&("Amount".to_string(), "50000".to_string())));
        assert!(values.contains(&("Remote".to_string(), "true".to_string())));
        assert!(values.contains(&("Note".to_string(), String::new())));
    }

    #[test]
    fn test_parse_values_json_rejects_bad_input() {
        assert!(parse_values_json("[1, 2]").is_err());
        assert!(parse_values_json("{bad").is_err());
        assert!(parse_values_json(r#"{"Nested": {"a": 1}}"#).is_err());
    }

    #[test]
    fn test_collect_values_set_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("values.json");
        std::fs::write(&path, r#"{"Name": "From file"}"#).unwrap();

        let args = ValueArgs {
            set: vec!["Name=From flag".to_string()],
            values: Some(path),
        };
        let values = collect_values(&args).unwrap();

        // Applied in order, so the flag wins.
        assert_eq!(values.last().unwrap(), &("Name".to_string(), "From flag".to_string()));
    }

    #[test]
    fn test_collect_values_missing_file() {
        let args = ValueArgs {
            set: vec![],
            values: Some(PathBuf::from("/definitely/not/here.json")),
        };
        assert!(matches!(collect_values(&args), Err(BdmError::IoError(_))));
    }

    #[test]
    fn test_confirm_unresolved_assume_yes() {
        assert!(confirm_unresolved(true, &["Name"]));
    }
}
