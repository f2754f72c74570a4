//! CLI argument parsing for bdm.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// bdm: generate documents from clause templates or AI-generated clauses.
///
/// Clause text marks fields to fill as `[Name]`. Values are given with
/// `--set Name=value` or a JSON file of name/value pairs; anything left empty
/// stays bracketed in the generated document.
#[derive(Parser, Debug)]
#[command(name = "bdm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (default: ./bdm.yaml when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for bdm.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the placeholders in a text file or a JSON array of clauses.
    Placeholders(PlaceholdersArgs),

    /// Fill placeholders in a text file and print the result.
    ///
    /// Works offline; nothing is sent to the service.
    Fill(FillArgs),

    /// List templates available on the service.
    Templates,

    /// Generate a document from a stored template.
    Template(TemplateArgs),

    /// Generate clauses with AI, fill them, and save the document.
    Ai(AiArgs),

    /// Generate one document per spreadsheet row and save the ZIP archive.
    Bulk(BulkArgs),

    /// Download the PDF of a generated document.
    Download(DownloadArgs),

    /// Print the effective configuration as YAML.
    ///
    /// Shows the values after the config file and environment overrides
    /// were applied.
    Config,
}

/// Placeholder values given on the command line.
#[derive(Args, Debug, Default, Clone)]
pub struct ValueArgs {
    /// Placeholder value as NAME=VALUE (repeatable).
    #[arg(long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// JSON file with an object of placeholder values.
    #[arg(long, value_name = "FILE")]
    pub values: Option<PathBuf>,
}

/// Arguments for the `placeholders` command.
#[derive(Parser, Debug)]
pub struct PlaceholdersArgs {
    /// Text file, or JSON file holding an array of clauses.
    pub file: PathBuf,
}

/// Arguments for the `fill` command.
#[derive(Parser, Debug)]
pub struct FillArgs {
    /// Text file to fill.
    pub file: PathBuf,

    #[command(flatten)]
    pub values: ValueArgs,
}

/// Arguments for the `template` command.
#[derive(Parser, Debug)]
pub struct TemplateArgs {
    /// Template ID.
    pub template_id: String,

    /// Document name (default: <template name>_<timestamp>).
    #[arg(short, long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub values: ValueArgs,

    /// Submit without asking when placeholders are empty.
    #[arg(short, long)]
    pub yes: bool,

    /// Print the filled clauses instead of generating.
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for the `ai` command.
#[derive(Parser, Debug)]
pub struct AiArgs {
    /// Document type (e.g., offer_letter, nda).
    pub document_type: String,

    /// Initial context as a JSON object.
    #[arg(long, default_value = "")]
    pub context: String,

    /// Document name (default: <document type>_AI_<timestamp>).
    #[arg(short, long)]
    pub name: Option<String>,

    #[command(flatten)]
    pub values: ValueArgs,

    /// Submit without asking when placeholders are empty.
    #[arg(short, long)]
    pub yes: bool,

    /// Print the filled clauses instead of saving.
    #[arg(long)]
    pub preview: bool,
}

/// Arguments for the `bulk` command.
#[derive(Parser, Debug)]
#[command(group(
    clap::ArgGroup::new("target")
        .required(true)
        .args(["template_id", "document_type"])
))]
pub struct BulkArgs {
    /// Spreadsheet with one row of placeholder values per document.
    pub spreadsheet: PathBuf,

    /// Fill this template once per row.
    #[arg(long)]
    pub template_id: Option<String>,

    /// Generate clauses with AI for this document type once per row.
    #[arg(long)]
    pub document_type: Option<String>,

    /// Where to save the archive (default: timestamped name in download_dir).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `download` command.
#[derive(Parser, Debug)]
pub struct DownloadArgs {
    /// Document ID.
    pub document_id: String,

    /// Where to save the PDF (default: <document id>.pdf in download_dir).
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}
