//! The `icalint` command-line linter.
//!
//! `cli` turns arguments into settings overrides, `input` resolves and reads
//! the documents and `report` renders parse results.

pub mod cli;
pub mod error;
pub mod input;
pub mod report;
