//! Schema loading and Draft-7 validation.
//!
//! The schema is an external contract: a single Draft-7 document shipped
//! under `schemas/dossier.schema.json` at the repository root. Validation
//! collects all violations (never fail-fast) and annotates each with the
//! dot-joined instance path and, when the schema location resolves, the
//! constraint keyword and expected value that were violated.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Filename of the schema asset, resolved under a `schemas/` directory.
const SCHEMA_FILENAME: &str = "dossier.schema.json";

/// How many ancestor directories of the executable to probe for the
/// schema asset. A cargo-built binary sits in `target/debug` (or
/// `target/debug/deps` under the test harness), so the repository root is
/// at most three levels up.
const SCHEMA_SEARCH_DEPTH: usize = 4;

/// Error while loading or compiling the schema.
#[derive(Error, Debug)]
pub enum SchemaLoadError {
    /// The schema file could not be read.
    #[error("cannot read schema file '{path}': {source}")]
    Io {
        /// Path to the schema file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not valid JSON.
    #[error("schema file '{path}' is not valid JSON: {source}")]
    InvalidJson {
        /// Path to the schema file.
        path: String,
        /// Underlying JSON parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The schema parsed but is not a valid Draft-7 schema.
    #[error("schema did not compile: {reason}")]
    InvalidSchema {
        /// Reason the evaluator rejected the schema.
        reason: String,
    },
}

/// The schema constraint a violation broke: the keyword (e.g. `required`,
/// `type`, `pattern`) and the expected value the schema declares for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Schema keyword, the last segment of the violated schema location.
    pub keyword: String,
    /// The value the schema declares for that keyword.
    pub expected: Value,
}

/// A single schema violation with structured context.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Dot-joined path from the document root to the offending value;
    /// `(root)` for failures of the document itself.
    pub path: String,
    /// Human-readable description from the evaluator.
    pub message: String,
    /// The violated constraint, when the schema location resolves to a
    /// concrete keyword/value pair.
    pub constraint: Option<Constraint>,
}

/// Ordered collection of violations from one validation pass.
///
/// Order follows the evaluator's natural traversal and is stable across
/// repeated runs for a fixed (instance, schema) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// Returns `true` iff no violations were recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of violations.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if there are no violations.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns a slice of all violations.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes self and returns the inner Vec.
    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

/// Read and parse the schema asset at `path`.
///
/// # Errors
///
/// Returns `SchemaLoadError::Io` if the file cannot be read and
/// `SchemaLoadError::InvalidJson` if it does not parse.
pub fn load_schema(path: &Path) -> Result<Value, SchemaLoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| SchemaLoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SchemaLoadError::InvalidJson {
        path: path.display().to_string(),
        source: e,
    })
}

/// Resolve the default schema location relative to the running executable.
///
/// Probes `<dir>/schemas/dossier.schema.json` for the executable's
/// directory and a bounded number of its ancestors, mirroring the fixed
/// relative layout of the repository (binary under `target/debug`, asset
/// two directories up). Returns `None` when no candidate exists, in which
/// case the caller must supply an explicit path.
pub fn default_schema_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let mut dir = exe.parent()?.to_path_buf();
    for _ in 0..SCHEMA_SEARCH_DEPTH {
        let candidate = dir.join("schemas").join(SCHEMA_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Validate `instance` against `schema` with Draft-7 semantics.
///
/// Collects **all** violations via the evaluator's error iterator, in its
/// natural traversal order. A valid document yields an empty report; an
/// invalid schema is a [`SchemaLoadError::InvalidSchema`].
pub fn validate(instance: &Value, schema: &Value) -> Result<ValidationReport, SchemaLoadError> {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft7);
    let validator = opts
        .build(schema)
        .map_err(|e| SchemaLoadError::InvalidSchema {
            reason: e.to_string(),
        })?;

    let violations = validator
        .iter_errors(instance)
        .map(|err| {
            let schema_pointer = err.schema_path.to_string();
            Violation {
                path: dot_path(&err.instance_path.to_string()),
                message: err.to_string(),
                constraint: constraint_at(schema, &schema_pointer),
            }
        })
        .collect();

    Ok(ValidationReport { violations })
}

/// Convert a JSON Pointer instance location into the dot-joined form used
/// in reports. The empty pointer (the document root) becomes `(root)`.
fn dot_path(pointer: &str) -> String {
    if pointer.is_empty() {
        return "(root)".to_string();
    }
    pointer
        .trim_start_matches('/')
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

/// Look up the constraint a schema location points at: the keyword is the
/// last pointer segment, the expected value is whatever the schema holds
/// there. Returns `None` when the pointer does not resolve or the value
/// carries no information (`false`, `0`, `null`, empty collections) — the
/// report omits the constraint line in that case.
fn constraint_at(schema: &Value, schema_pointer: &str) -> Option<Constraint> {
    let keyword = schema_pointer
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())?
        .replace("~1", "/")
        .replace("~0", "~");
    let expected = schema.pointer(schema_pointer)?.clone();
    if is_falsy(&expected) {
        return None;
    }
    Some(Constraint { keyword, expected })
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
