//! Switches that change what a parse reports.

use icalint_core::config::ParserConfig;

use crate::rfc::ical::core::ComponentKind;

/// Options for [`super::parse_with_options`].
///
/// The default recognises STANDARD and DAYLIGHT blocks and leaves the
/// property-value checks to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Run DATE-TIME, DURATION and RRULE value checks on every property.
    pub value_checks: bool,
    /// Recognise only VCALENDAR, VEVENT, VTODO, VJOURNAL, VFREEBUSY,
    /// VTIMEZONE and VALARM.
    pub strict_components: bool,
}

impl ParseOptions {
    #[must_use]
    pub const fn with_value_checks(mut self, enabled: bool) -> Self {
        self.value_checks = enabled;
        self
    }

    #[must_use]
    pub const fn with_strict_components(mut self, enabled: bool) -> Self {
        self.strict_components = enabled;
        self
    }

    /// Resolves a `BEGIN:` name to a component kind, or `None` if it is not
    /// recognised under these options.
    #[must_use]
    pub fn component_kind(&self, name: &str) -> Option<ComponentKind> {
        ComponentKind::from_name(name)
            .filter(|kind| !(self.strict_components && kind.is_timezone_observance()))
    }
}

impl From<ParserConfig> for ParseOptions {
    fn from(config: ParserConfig) -> Self {
        Self {
            value_checks: config.value_checks,
            strict_components: config.strict_components,
        }
    }
}
