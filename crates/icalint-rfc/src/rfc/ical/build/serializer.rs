//! iCalendar serializer (RFC 5545).

use crate::rfc::ical::core::{CalendarComponent, Property};

const CRLF: &str = "\r\n";

/// Serializes top-level properties followed by each component.
#[must_use]
pub fn serialize(components: &[CalendarComponent], properties: &[Property]) -> String {
    let mut result = String::new();

    for prop in properties {
        result.push_str(&serialize_property(prop));
    }

    for component in components {
        result.push_str(&serialize_component(component));
    }

    result
}

/// Serializes a component, its properties and its children in source order.
///
/// Every component is written with an END line, including ones that were
/// never closed in the input.
#[must_use]
pub fn serialize_component(component: &CalendarComponent) -> String {
    let mut result = String::new();

    result.push_str("BEGIN:");
    result.push_str(component.name());
    result.push_str(CRLF);

    for prop in &component.properties {
        result.push_str(&serialize_property(prop));
    }

    for child in &component.sub_components {
        result.push_str(&serialize_component(child));
    }

    result.push_str("END:");
    result.push_str(component.name());
    result.push_str(CRLF);

    result
}

/// Serializes a property as a single CRLF-terminated line.
///
/// A property named `BEGIN` or `END` is written in lowercase so it does not
/// read back as a component delimiter.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = match prop.name.as_str() {
        "BEGIN" | "END" => prop.name.to_ascii_lowercase(),
        _ => prop.name.clone(),
    };

    for param in &prop.parameters {
        line.push(';');
        line.push_str(&param.name);
        line.push('=');
        line.push_str(&param.value);
    }

    line.push(':');
    line.push_str(&prop.value);
    line.push_str(CRLF);

    line
}
