//! Shared configuration, constants and error types for the icalint workspace.

pub mod config;
pub mod constants;
pub mod error;
