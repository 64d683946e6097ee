//! # dossier-schema — Schema Loading & Validation
//!
//! Loads the fixed Draft-7 dossier schema asset and validates frontmatter
//! objects against it using the `jsonschema` crate.
//!
//! ## Contract
//!
//! Validation is never fail-fast: every violation is collected, in the
//! evaluator's natural traversal order, so a report enumerates everything
//! wrong with a document at once. An empty report means the document is
//! valid. The schema itself is a static asset maintained outside this
//! tool; it is read, never written.
//!
//! ## Crate Policy
//!
//! - Depends only on `serde_json` and the `jsonschema` evaluator.
//! - Draft-7 semantics exactly; no custom keywords, no special-casing of
//!   non-object instances (the evaluator's own conventions apply).

pub mod validate;

pub use validate::{
    default_schema_path, load_schema, validate, Constraint, SchemaLoadError, ValidationReport,
    Violation,
};
