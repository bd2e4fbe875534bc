//! Lint reports and their text and JSON renderings.

use icalint_core::config::OutputFormat;
use icalint_rfc::rfc::ical::parse::{ParseOptions, ParseResult, parse_with_options};
use serde::Serialize;

use crate::error::AppResult;

/// The parse result for one named document.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: String,
    #[serde(flatten)]
    pub result: ParseResult,
}

impl FileReport {
    /// Parses `text` and labels the result with `source`.
    #[must_use]
    pub fn lint(source: impl Into<String>, text: &str, options: &ParseOptions) -> Self {
        let source = source.into();
        let result = parse_with_options(text, options);
        tracing::debug!(
            %source,
            valid = result.is_valid(),
            errors = result.errors().len(),
            warnings = result.warnings().len(),
            "Linted document"
        );
        Self { source, result }
    }

    /// Whether this document counts as passing. Warnings only fail it when
    /// `deny_warnings` is set.
    #[must_use]
    pub fn passes(&self, deny_warnings: bool) -> bool {
        self.result.is_valid() && (!deny_warnings || self.result.warnings().is_empty())
    }
}

/// ## Summary
/// Renders reports in the requested format.
///
/// ## Errors
/// Returns an error if JSON serialization fails.
pub fn render(reports: &[FileReport], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
    }
}

/// One line per diagnostic, ordered by line, then a summary per document.
#[must_use]
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();

    for report in reports {
        for diagnostic in report.result.diagnostics() {
            out.push_str(&format!("{}: {diagnostic}\n", report.source));
        }

        let errors = report.result.errors().len();
        let warnings = report.result.warnings().len();
        if errors == 0 && warnings == 0 {
            out.push_str(&format!("{}: ok\n", report.source));
        } else {
            out.push_str(&format!(
                "{}: {errors} {}, {warnings} {}\n",
                report.source,
                plural(errors, "error"),
                plural(warnings, "warning"),
            ));
        }
    }

    out
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
