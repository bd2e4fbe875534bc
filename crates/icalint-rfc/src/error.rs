use thiserror::Error;

/// RFC parsing and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid calendar: {count} error(s), first at line {line}: {message}")]
    InvalidCalendar {
        count: usize,
        line: usize,
        message: String,
    },

    #[error("Unknown diagnostic code: {0}")]
    UnknownDiagnosticCode(String),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
