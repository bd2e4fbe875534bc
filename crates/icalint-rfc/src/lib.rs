//! iCalendar (RFC 5545) parsing and validation.
//!
//! The entry point is [`rfc::ical::parse::parse_icalendar`], which never fails:
//! every structural and semantic problem is reported as a positional
//! [`rfc::ical::core::Diagnostic`] on the returned result.

pub mod error;
pub mod rfc;
