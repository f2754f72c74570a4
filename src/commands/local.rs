//! Offline commands: `bdm placeholders` and `bdm fill`.

use super::collect_values;
use crate::cli::{FillArgs, PlaceholdersArgs};
use crate::error::{BdmError, Result};
use crate::fs::read_input;
use crate::model::Clause;
use crate::placeholder::{
    PlaceholderValues, extract_from_clauses, extract_placeholders, fill_placeholders,
};
use std::path::Path;

/// Execute the `bdm placeholders` command.
///
/// A `.json` file is read as an array of clauses; anything else as text.
pub fn cmd_placeholders(args: PlaceholdersArgs) -> Result<()> {
    let names = placeholders_in_file(&args.file)?;

    if names.is_empty() {
        println!("No placeholders found.");
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}

fn placeholders_in_file(path: &Path) -> Result<Vec<String>> {
    let raw = read_input(path)?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    if is_json {
        let clauses: Vec<Clause> = serde_json::from_str(&raw).map_err(|e| {
            BdmError::ValidationError(format!(
                "'{}' is not a JSON array of clauses: {}",
                path.display(),
                e
            ))
        })?;
        Ok(extract_from_clauses(&clauses))
    } else {
        Ok(extract_placeholders(Some(&raw)))
    }
}

/// Execute the `bdm fill` command.
///
/// Values for names that do not appear in the text are reported and ignored.
pub fn cmd_fill(args: FillArgs) -> Result<()> {
    let text = read_input(&args.file)?;
    let names = extract_placeholders(Some(&text));

    let mut values = PlaceholderValues::new();
    for (name, value) in collect_values(&args.values)? {
        if !names.contains(&name) {
            tracing::warn!(placeholder = %name, "value given for a placeholder not in the text");
            eprintln!("Ignoring unknown placeholder '{}'", name);
            continue;
        }
        values.set(name, value);
    }

    print!("{}", fill_placeholders(Some(&text), &values));

    let pending = values.pending(&names);
    if !pending.is_empty() {
        eprintln!("{} placeholders left unfilled: {}", pending.len(), pending.join(", "));
    }
    Ok(())
}
