//! The outcome of parsing one document.

use serde::Serialize;

use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{
    CalendarComponent, ComponentKind, Diagnostic, DiagnosticCode, Diagnostics, Property,
};

/// Everything a parse produced: the component forest, top-level properties
/// and all diagnostics.
///
/// `valid` is true exactly when there are no errors; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    valid: bool,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    components: Vec<CalendarComponent>,
    properties: Vec<Property>,
}

impl ParseResult {
    pub(crate) fn new(
        diagnostics: Diagnostics,
        components: Vec<CalendarComponent>,
        properties: Vec<Property>,
    ) -> Self {
        let (errors, warnings) = diagnostics.into_parts();
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            components,
            properties,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Top-level components in source order.
    #[must_use]
    pub fn components(&self) -> &[CalendarComponent] {
        &self.components
    }

    /// Properties that appeared outside any component.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Returns the first top-level VCALENDAR, if any.
    #[must_use]
    pub fn calendar(&self) -> Option<&CalendarComponent> {
        self.components
            .iter()
            .find(|c| c.kind == ComponentKind::Calendar)
    }

    /// Errors and warnings together, ordered by line (errors first on ties).
    #[must_use]
    pub fn diagnostics(&self) -> Vec<&Diagnostic> {
        let mut all: Vec<&Diagnostic> = self.errors.iter().chain(&self.warnings).collect();
        all.sort_by_key(|d| d.line);
        all
    }

    /// Returns whether any error or warning carries `code`.
    #[must_use]
    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.errors
            .iter()
            .chain(&self.warnings)
            .any(|d| d.code == code)
    }

    /// Converts an invalid result into an error, for callers that want `?`.
    ///
    /// ## Errors
    /// Returns [`RfcError::InvalidCalendar`] describing the first error when
    /// the result is not valid.
    pub fn ensure_valid(self) -> RfcResult<Self> {
        match self.errors.first() {
            None => Ok(self),
            Some(first) => Err(RfcError::InvalidCalendar {
                count: self.errors.len(),
                line: first.line,
                message: first.message.clone(),
            }),
        }
    }
}
