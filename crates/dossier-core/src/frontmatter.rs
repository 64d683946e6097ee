//! Frontmatter block location and JSON parsing.
//!
//! The block is matched with a multiline, lazily-quantified pattern: the
//! first `---dossier` line opens it, the next `---` at the start of a line
//! closes it, and everything in between is the JSON body. Matching is
//! non-greedy so a document containing several marker pairs yields the
//! first block only.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::error::ExtractionError;

/// Matches `---dossier` on its own line, the lazily-captured body, then
/// `---` at the start of a line. `(?s)` lets `.` cross newlines; `(?m)`
/// keeps `^` per-line. CR before LF is tolerated for CRLF documents.
const FRONTMATTER_PATTERN: &str = r"(?ms)^---dossier[ \t]*\r?\n(.*?)\r?\n---";

fn frontmatter_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FRONTMATTER_PATTERN).expect("frontmatter pattern is valid"))
}

/// Extract and parse the frontmatter object from a dossier file.
///
/// Reads the file as UTF-8 text, then delegates to [`parse_frontmatter`].
/// The file handle is scoped to the read and released on every exit path.
///
/// # Errors
///
/// Returns `ExtractionError::Io` if the file cannot be read,
/// `ExtractionError::MissingFrontmatter` if no block is present, and
/// `ExtractionError::InvalidJson` if the block body does not parse.
pub fn extract_frontmatter(path: &Path) -> Result<Value, ExtractionError> {
    let content = fs::read_to_string(path).map_err(|e| ExtractionError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_frontmatter(&content)
}

/// Extract and parse the frontmatter object from an in-memory document.
///
/// Split out from [`extract_frontmatter`] so the matching and parsing
/// contract can be exercised without touching the filesystem.
///
/// # Errors
///
/// Returns `ExtractionError::MissingFrontmatter` if no `---dossier` …
/// `---` pair is found, or `ExtractionError::InvalidJson` wrapping the
/// underlying parse failure (with position and reason) otherwise.
pub fn parse_frontmatter(content: &str) -> Result<Value, ExtractionError> {
    let captures = frontmatter_regex()
        .captures(content)
        .ok_or(ExtractionError::MissingFrontmatter)?;

    // Group 1 always exists when the pattern matches.
    let body = captures
        .get(1)
        .ok_or(ExtractionError::MissingFrontmatter)?
        .as_str();

    let value = serde_json::from_str(body)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;
    use std::io::Write;

    fn dossier_doc(body: &str) -> String {
        format!("---dossier\n{body}\n---\n\n# Deploy to AWS\n\nSteps follow.\n")
    }

    #[test]
    fn extracts_object_equal_to_independent_parse() {
        let body = r#"{"title": "Deploy", "version": "1.0.0", "status": "draft"}"#;
        let value = parse_frontmatter(&dossier_doc(body)).unwrap();
        let expected: Value = serde_json::from_str(body).unwrap();
        assert_eq!(value, expected);
    }

    #[test]
    fn extracts_multiline_json_body() {
        let body = "{\n  \"title\": \"Deploy\",\n  \"version\": \"1.0.0\",\n  \"status\": \"draft\"\n}";
        let value = parse_frontmatter(&dossier_doc(body)).unwrap();
        assert_eq!(value["title"], "Deploy");
        assert_eq!(value["status"], "draft");
    }

    #[test]
    fn block_need_not_open_the_file() {
        let doc = format!("<!-- generated -->\n\n{}", dossier_doc(r#"{"title": "T"}"#));
        let value = parse_frontmatter(&doc).unwrap();
        assert_eq!(value["title"], "T");
    }

    #[test]
    fn first_block_wins() {
        let doc = format!(
            "{}\n---dossier\n{{\"title\": \"second\"}}\n---\n",
            dossier_doc(r#"{"title": "first"}"#)
        );
        let value = parse_frontmatter(&doc).unwrap();
        assert_eq!(value["title"], "first");
    }

    #[test]
    fn crlf_document_is_accepted() {
        let doc = "---dossier\r\n{\"title\": \"T\"}\r\n---\r\n";
        let value = parse_frontmatter(doc).unwrap();
        assert_eq!(value["title"], "T");
    }

    #[test]
    fn missing_start_marker_fails() {
        let err = parse_frontmatter("# Just markdown\n\nNo block here.\n").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingFrontmatter));
        assert!(err.to_string().contains("---dossier"));
    }

    #[test]
    fn missing_end_marker_fails() {
        let err = parse_frontmatter("---dossier\n{\"title\": \"T\"}\n").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingFrontmatter));
    }

    #[test]
    fn invalid_json_reports_parse_failure() {
        let err = parse_frontmatter(&dossier_doc("{invalid json}")).unwrap_err();
        match err {
            ExtractionError::InvalidJson(source) => {
                // serde_json reports line/column position.
                assert!(source.to_string().contains("line"));
            }
            other => panic!("expected InvalidJson, got: {other}"),
        }
    }

    #[test]
    fn non_object_json_is_returned_as_is() {
        // The extractor parses any JSON value; object-shape enforcement is
        // the schema evaluator's job.
        let value = parse_frontmatter(&dossier_doc("[1, 2, 3]")).unwrap();
        assert_eq!(value, json!([1, 2, 3]));
    }

    #[test]
    fn extract_from_file_on_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(dossier_doc(r#"{"title": "Deploy"}"#).as_bytes())
            .unwrap();
        let value = extract_frontmatter(file.path()).unwrap();
        assert_eq!(value["title"], "Deploy");
    }

    #[test]
    fn extract_missing_file_is_io_error() {
        let err = extract_frontmatter(Path::new("/nonexistent/dossier.md")).unwrap_err();
        match err {
            ExtractionError::Io { path, .. } => assert!(path.contains("nonexistent")),
            other => panic!("expected Io, got: {other}"),
        }
    }

    proptest! {
        #[test]
        fn roundtrips_string_fields(
            title in "[a-zA-Z0-9 .,_-]{0,40}",
            version in "[0-9]{1,3}\\.[0-9]{1,3}\\.[0-9]{1,3}",
        ) {
            let object = json!({ "title": title, "version": version });
            let doc = dossier_doc(&object.to_string());
            let value = parse_frontmatter(&doc).unwrap();
            prop_assert_eq!(value, object);
        }
    }
}
