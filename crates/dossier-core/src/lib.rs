//! # dossier-core — Frontmatter Extraction
//!
//! Locates the `---dossier` frontmatter block in a markdown document and
//! parses its body as strict JSON. This is the only parsing this tool owns;
//! schema evaluation lives in `dossier-schema`.
//!
//! ## Frontmatter Format
//!
//! A dossier file opens with a delimited metadata block:
//!
//! ```markdown
//! ---dossier
//! { "title": "Deploy to AWS", "version": "1.0.0", "status": "draft" }
//! ---
//! ```
//!
//! The body between the markers is strict JSON, not the key-value
//! frontmatter common elsewhere. The first marker pair wins; anything after
//! the closing `---` is ordinary markdown.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dossier-*` crates (leaf of the DAG).
//! - No side effects beyond reading the input file.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod frontmatter;

pub use error::ExtractionError;
pub use frontmatter::{extract_frontmatter, parse_frontmatter};
