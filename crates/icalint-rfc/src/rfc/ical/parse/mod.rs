//! iCalendar parsing (RFC 5545).
//!
//! This module turns text into a [`ParseResult`]:
//! - Lexer: line-ending normalization, unfolding, content line decomposition
//! - Parser: BEGIN/END matching on an explicit component stack
//! - Options: which component names are recognised and whether value checks run

mod lexer;
mod options;
mod parser;
mod result;

pub use lexer::{normalize_line_endings, parse_content_line, parse_parameters, split_lines, unfold};
pub use options::ParseOptions;
pub use parser::{parse_icalendar, parse_with_options};
pub use result::ParseResult;
