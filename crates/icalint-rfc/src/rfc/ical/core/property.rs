//! iCalendar property and parameter types (RFC 5545 §3.1, §3.2).

use serde::Serialize;

/// A property parameter (`NAME=VALUE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name (normalized to uppercase).
    pub name: String,
    /// Parameter value as written, quotes included.
    pub value: String,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
        }
    }
}

/// A single content line that is not a `BEGIN:`/`END:` marker.
///
/// The value is kept exactly as it appeared after unfolding; TEXT escapes such
/// as `\n` and `\,` are left for the consumer to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Raw value string (after unfolding, before unescaping).
    pub value: String,
    /// Parameters in order of appearance.
    pub parameters: Vec<Parameter>,
    /// Logical line the property was read from (1-based).
    pub line: usize,
}

impl Property {
    /// Creates a property without parameters.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into().to_ascii_uppercase(),
            value: value.into(),
            parameters: Vec::new(),
            line,
        }
    }

    /// Adds a parameter, keeping source order.
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(Parameter::new(name, value));
        self
    }

    /// Returns the value of the first parameter with the given (uppercase) name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}
