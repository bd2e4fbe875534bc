//! Validation logic for RFC 5545 compliance.
//!
//! - `calendar`: required properties and per-component invariants
//! - `values`: DATE-TIME, DURATION and RRULE value grammars

pub mod calendar;
pub mod values;

pub use calendar::validate_calendar;
pub use values::{
    validate_datetime, validate_duration, validate_property_value, validate_property_values,
    validate_rrule,
};
