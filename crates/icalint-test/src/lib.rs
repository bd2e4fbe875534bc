//! icalint - integration test support.
//!
//! Re-exports the workspace crates so integration tests can use
//! `icalint::` paths.

pub mod ical {
    pub use icalint_rfc::rfc::ical::*;
}

pub mod validation {
    pub use icalint_rfc::rfc::validation::*;
}

pub mod app {
    pub use icalint_app::*;
}

pub use icalint_core::config;
pub use icalint_rfc::error::{RfcError, RfcResult};
