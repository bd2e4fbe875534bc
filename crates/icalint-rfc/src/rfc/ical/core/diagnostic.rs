//! Positional diagnostics produced while parsing and validating.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::RfcError;

/// Diagnostic severity. Only errors make a parse invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Machine-readable kind of a diagnostic.
///
/// The string form returned by [`DiagnosticCode::as_str`] is stable and is
/// what callers should match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    /// `BEGIN:` with a component name outside the recognised set.
    UnknownComponent,
    /// `END:` while no component is open.
    UnmatchedEnd,
    /// `END:` naming a different component than the open one.
    MismatchedEnd,
    /// Non-empty line with no colon.
    InvalidLine,
    /// Input ended with a component still open.
    UnclosedComponent,
    MissingVcalendar,
    MultipleVcalendar,
    MissingRequiredProperty,
    /// VERSION is present but not `2.0`.
    InvalidVersion,
    MissingDtstartOrMethod,
    /// VTIMEZONE without a STANDARD or DAYLIGHT block.
    MissingTimezoneDefinition,
    InvalidDatetime,
    InvalidDuration,
    MissingRruleFreq,
    InvalidRruleFreq,
}

impl DiagnosticCode {
    pub const ALL: [Self; 15] = [
        Self::UnknownComponent,
        Self::UnmatchedEnd,
        Self::MismatchedEnd,
        Self::InvalidLine,
        Self::UnclosedComponent,
        Self::MissingVcalendar,
        Self::MultipleVcalendar,
        Self::MissingRequiredProperty,
        Self::InvalidVersion,
        Self::MissingDtstartOrMethod,
        Self::MissingTimezoneDefinition,
        Self::InvalidDatetime,
        Self::InvalidDuration,
        Self::MissingRruleFreq,
        Self::InvalidRruleFreq,
    ];

    /// Returns the stable code string, e.g. `MISMATCHED_END`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownComponent => "UNKNOWN_COMPONENT",
            Self::UnmatchedEnd => "UNMATCHED_END",
            Self::MismatchedEnd => "MISMATCHED_END",
            Self::InvalidLine => "INVALID_LINE",
            Self::UnclosedComponent => "UNCLOSED_COMPONENT",
            Self::MissingVcalendar => "MISSING_VCALENDAR",
            Self::MultipleVcalendar => "MULTIPLE_VCALENDAR",
            Self::MissingRequiredProperty => "MISSING_REQUIRED_PROPERTY",
            Self::InvalidVersion => "INVALID_VERSION",
            Self::MissingDtstartOrMethod => "MISSING_DTSTART_OR_METHOD",
            Self::MissingTimezoneDefinition => "MISSING_TIMEZONE_DEFINITION",
            Self::InvalidDatetime => "INVALID_DATETIME",
            Self::InvalidDuration => "INVALID_DURATION",
            Self::MissingRruleFreq => "MISSING_RRULE_FREQ",
            Self::InvalidRruleFreq => "INVALID_RRULE_FREQ",
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticCode {
    type Err = RfcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| RfcError::UnknownDiagnosticCode(s.to_string()))
    }
}

/// A single error or warning tied to a logical line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Logical line (1-based) the diagnostic refers to.
    pub line: usize,
    pub message: String,
    pub code: DiagnosticCode,
    pub severity: Severity,
}

impl Diagnostic {
    #[must_use]
    pub fn error(code: DiagnosticCode, line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            code,
            severity: Severity::Error,
        }
    }

    #[must_use]
    pub fn warning(code: DiagnosticCode, line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
            code,
            severity: Severity::Warning,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}: {}[{}]: {}",
            self.line, self.severity, self.code, self.message
        )
    }
}

/// Append-only error and warning lists shared by every parsing stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic in the list matching its severity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn error(&mut self, code: DiagnosticCode, line: usize, message: impl Into<String>) {
        self.push(Diagnostic::error(code, line, message));
    }

    pub fn warning(&mut self, code: DiagnosticCode, line: usize, message: impl Into<String>) {
        self.push(Diagnostic::warning(code, line, message));
    }

    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Splits into `(errors, warnings)`.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Diagnostic>, Vec<Diagnostic>) {
        (self.errors, self.warnings)
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}
