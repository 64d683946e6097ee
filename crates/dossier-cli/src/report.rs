//! Human-readable report output.
//!
//! Everything the user sees goes through this module, on stdout. The
//! format is for human eyes, not machine parsing: a summary of the
//! extracted frontmatter, then a success banner or the 1-indexed list of
//! violations with path, message, and violated constraint.
//!
//! Message framing distinguishes the two failure shapes: `❌ INVALID` is
//! a completed validation with violations, `❌ ERROR` is a run that never
//! reached a verdict.

use serde_json::Value;

use dossier_schema::ValidationReport;

use crate::Outcome;

/// Print the extraction success banner and the summary fields read off
/// the frontmatter object. Absent fields render as `N/A`; non-string
/// values render in their JSON form.
pub fn extraction_summary(frontmatter: &Value) {
    println!("✓ Frontmatter extracted successfully");
    println!("  Title: {}", summary_field(frontmatter, "title"));
    println!("  Version: {}", summary_field(frontmatter, "version"));
    println!("  Status: {}", summary_field(frontmatter, "status"));
    println!();
}

/// Print the verdict for a completed validation pass.
pub fn verdict(report: &ValidationReport) -> Outcome {
    if report.is_valid() {
        println!("✅ VALID - Dossier schema is compliant");
        println!();
        return Outcome::Valid;
    }

    println!("❌ INVALID - Schema validation failed:");
    println!();
    for (i, violation) in report.violations().iter().enumerate() {
        println!("  Error {}:", i + 1);
        println!("    Path: {}", violation.path);
        println!("    Message: {}", violation.message);
        if let Some(constraint) = &violation.constraint {
            println!("    Constraint: {} = {}", constraint.keyword, constraint.expected);
        }
        println!();
    }
    Outcome::Invalid
}

/// Print a uniform error line for a run that produced no verdict.
pub fn error(message: &str) -> Outcome {
    println!("❌ ERROR: {message}");
    println!();
    Outcome::Error
}

fn summary_field(frontmatter: &Value, key: &str) -> String {
    match frontmatter.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_field_reads_strings_bare() {
        let fm = json!({ "title": "Deploy", "version": "1.0.0" });
        assert_eq!(summary_field(&fm, "title"), "Deploy");
        assert_eq!(summary_field(&fm, "version"), "1.0.0");
    }

    #[test]
    fn summary_field_defaults_to_placeholder() {
        let fm = json!({ "title": "Deploy" });
        assert_eq!(summary_field(&fm, "status"), "N/A");
    }

    #[test]
    fn summary_field_renders_non_strings_as_json() {
        let fm = json!({ "version": 2 });
        assert_eq!(summary_field(&fm, "version"), "2");
    }

    #[test]
    fn summary_field_on_non_object_is_placeholder() {
        assert_eq!(summary_field(&json!([1, 2]), "title"), "N/A");
    }
}
