//! Error type for frontmatter extraction.
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations. Underlying IO and JSON failures are preserved as
//! sources so callers keep position and reason information.

use thiserror::Error;

/// Error during frontmatter extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The document contains no `---dossier` … `---` block.
    #[error(
        "no dossier frontmatter found; expected a block of the form:\n---dossier\n{{ ... }}\n---"
    )]
    MissingFrontmatter,

    /// The block was found but its body is not valid JSON.
    #[error("failed to parse frontmatter JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The input file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        /// Path to the file that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
