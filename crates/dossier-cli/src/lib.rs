//! # dossier-cli — Validation Flow & Reporting
//!
//! Wires the pieces into a linear flow: extract the frontmatter, load the
//! schema, validate, report. Any failure before validation short-circuits
//! to an error report; a completed validation is either valid or invalid.
//!
//! The flow lives in the library (returning an [`Outcome`]) so tests can
//! drive it without spawning the binary; `main` only maps the outcome to
//! an exit code.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use dossier_core::extract_frontmatter;
use dossier_schema::{default_schema_path, load_schema, validate};

pub mod report;

/// Validate a dossier markdown file against the dossier JSON Schema.
///
/// Extracts the JSON frontmatter between `---dossier` and `---` markers
/// and checks it against the Draft-7 schema shipped alongside the tool.
#[derive(Parser, Debug)]
#[command(name = "dossier", version, about)]
pub struct Cli {
    /// Path to the dossier markdown file.
    pub file: Option<PathBuf>,

    /// Schema file to validate against (defaults to the
    /// schemas/dossier.schema.json asset near the executable).
    #[arg(long, value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

/// Terminal state of one validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The frontmatter conforms to the schema.
    Valid,
    /// Validation completed and found violations. A negative result, not
    /// an error: it is fully reported before the process exits.
    Invalid,
    /// Extraction, schema loading, or argument handling failed; no
    /// verdict was reached.
    Error,
}

impl Outcome {
    /// Exit-code mapping: only a valid document exits zero.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Outcome::Valid => ExitCode::SUCCESS,
            Outcome::Invalid | Outcome::Error => ExitCode::FAILURE,
        }
    }
}

/// Run the full validation flow for the parsed arguments.
///
/// Missing file argument prints the usage message and yields
/// [`Outcome::Error`] without touching the filesystem. A nonexistent input
/// path is likewise reported before extraction is attempted.
pub fn run(cli: &Cli) -> Outcome {
    let Some(file) = cli.file.as_deref() else {
        println!("Usage: dossier <dossier-file.md>");
        println!("Example: dossier examples/devops/deploy-to-aws.md");
        return Outcome::Error;
    };

    if !file.exists() {
        println!("Error: File not found: {}", file.display());
        return Outcome::Error;
    }

    validate_file(file, cli.schema.as_deref())
}

/// Validate one dossier file and print the human-readable report.
pub fn validate_file(path: &Path, schema_override: Option<&Path>) -> Outcome {
    println!();
    println!("🔍 Validating: {}", path.display());
    println!();

    let frontmatter = match extract_frontmatter(path) {
        Ok(value) => value,
        Err(e) => return report::error(&e.to_string()),
    };
    tracing::debug!(
        fields = frontmatter.as_object().map_or(0, |o| o.len()),
        "frontmatter extracted"
    );
    report::extraction_summary(&frontmatter);

    let schema = match load_schema_document(schema_override) {
        Ok(value) => value,
        Err(message) => return report::error(&message),
    };

    let validation = match validate(&frontmatter, &schema) {
        Ok(report) => report,
        Err(e) => return report::error(&e.to_string()),
    };

    report::verdict(&validation)
}

/// Load the schema from the override path or the default fixed location.
fn load_schema_document(schema_override: Option<&Path>) -> Result<Value, String> {
    let schema_path = match schema_override {
        Some(path) => path.to_path_buf(),
        None => default_schema_path().ok_or_else(|| {
            "schema file not found near the executable; pass --schema <PATH>".to_string()
        })?,
    };
    tracing::debug!(schema = %schema_path.display(), "loading schema");
    load_schema(&schema_path).map_err(|e| e.to_string())
}
