//! ## Summary
//! Semantic checks over a parsed component forest.
//!
//! RFC 5545 §3.4 requires a single VCALENDAR carrying VERSION and PRODID, and
//! §3.6 lists the properties each calendar component must have. Only a small
//! required-property set is enforced here; cardinality and value types are not.

use crate::rfc::ical::core::{CalendarComponent, ComponentKind, DiagnosticCode, Diagnostics};

/// Properties every VCALENDAR must carry (RFC 5545 §3.6).
const REQUIRED_CALENDAR_PROPERTIES: &[&str] = &["VERSION", "PRODID"];

/// Properties every VEVENT must carry (RFC 5545 §3.6.1).
const REQUIRED_EVENT_PROPERTIES: &[&str] = &["UID", "DTSTAMP"];

/// Properties every VTODO must carry (RFC 5545 §3.6.2).
const REQUIRED_TODO_PROPERTIES: &[&str] = &["UID", "DTSTAMP"];

/// The only VERSION value RFC 5545 defines.
const SUPPORTED_VERSION: &str = "2.0";

/// ## Summary
/// Validates the top-level forest, appending to `diagnostics`.
///
/// Exactly one VCALENDAR is expected. With none, `MISSING_VCALENDAR` is the only
/// semantic diagnostic; with several, the first is validated and the second
/// is reported.
pub fn validate_calendar(components: &[CalendarComponent], diagnostics: &mut Diagnostics) {
    let mut calendars = components
        .iter()
        .filter(|c| c.kind == ComponentKind::Calendar);

    let Some(calendar) = calendars.next() else {
        diagnostics.error(
            DiagnosticCode::MissingVcalendar,
            1,
            "Missing VCALENDAR component",
        );
        return;
    };

    if let Some(second) = calendars.next() {
        diagnostics.error(
            DiagnosticCode::MultipleVcalendar,
            second.start_line,
            "Multiple VCALENDAR components found",
        );
    }

    validate_vcalendar(calendar, diagnostics);

    for component in &calendar.sub_components {
        validate_component(component, diagnostics);
    }
}

fn validate_vcalendar(calendar: &CalendarComponent, diagnostics: &mut Diagnostics) {
    for required in REQUIRED_CALENDAR_PROPERTIES {
        if !calendar.has_property(required) {
            diagnostics.error(
                DiagnosticCode::MissingRequiredProperty,
                calendar.start_line,
                format!("Missing required property: {required}"),
            );
        }
    }

    if let Some(version) = calendar.property("VERSION")
        && version.value != SUPPORTED_VERSION
    {
        diagnostics.warning(
            DiagnosticCode::InvalidVersion,
            version.line,
            format!(
                "VERSION should be \"{SUPPORTED_VERSION}\" (found: \"{}\")",
                version.value
            ),
        );
    }
}

/// Per-kind checks for a direct child of the calendar.
fn validate_component(component: &CalendarComponent, diagnostics: &mut Diagnostics) {
    match component.kind {
        ComponentKind::Event => validate_event(component, diagnostics),
        ComponentKind::Todo => {
            require_properties(component, REQUIRED_TODO_PROPERTIES, diagnostics);
        }
        ComponentKind::Timezone => validate_timezone(component, diagnostics),
        // Structural parsing already covered everything checked for these.
        ComponentKind::Calendar
        | ComponentKind::Journal
        | ComponentKind::FreeBusy
        | ComponentKind::Alarm
        | ComponentKind::Standard
        | ComponentKind::Daylight => {}
    }
}

fn validate_event(event: &CalendarComponent, diagnostics: &mut Diagnostics) {
    require_properties(event, REQUIRED_EVENT_PROPERTIES, diagnostics);

    if !event.has_property("DTSTART") && !event.has_property("METHOD") {
        diagnostics.error(
            DiagnosticCode::MissingDtstartOrMethod,
            event.start_line,
            "VEVENT must have either DTSTART or METHOD property",
        );
    }
}

fn validate_timezone(timezone: &CalendarComponent, diagnostics: &mut Diagnostics) {
    require_properties(timezone, &["TZID"], diagnostics);

    if !timezone.has_child(ComponentKind::is_timezone_observance) {
        diagnostics.error(
            DiagnosticCode::MissingTimezoneDefinition,
            timezone.start_line,
            "VTIMEZONE must contain at least one STANDARD or DAYLIGHT component",
        );
    }
}

/// One `MISSING_REQUIRED_PROPERTY` per absent name, at the component's start.
fn require_properties(
    component: &CalendarComponent,
    required: &[&str],
    diagnostics: &mut Diagnostics,
) {
    for name in required {
        if !component.has_property(name) {
            diagnostics.error(
                DiagnosticCode::MissingRequiredProperty,
                component.start_line,
                format!("{} missing required property: {name}", component.kind),
            );
        }
    }
}
