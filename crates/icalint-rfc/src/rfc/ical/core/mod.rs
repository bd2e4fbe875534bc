//! iCalendar core models (RFC 5545).
//!
//! These types describe what the parser found, not what RFC 5545 allows:
//! - Components mirror source nesting, even when the nesting is invalid
//! - Property values are kept raw (unfolded but still escaped)
//! - Diagnostics carry a stable code alongside the human-readable message

mod component;
mod diagnostic;
mod property;

pub use component::{CalendarComponent, ComponentKind};
pub use diagnostic::{Diagnostic, DiagnosticCode, Diagnostics, Severity};
pub use property::{Parameter, Property};
