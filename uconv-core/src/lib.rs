//! uconv Core - numeric tokens and structural errors
//!
//! Shared by the unit table and the phrase parser:
//! - `parse_number` / `format_number` for reading and echoing quantities
//! - `ParseError` for phrases that do not fit the grammar

mod error;
mod number;

pub use error::{ParseError, UnitRole, PARSE_ERROR_MESSAGE};
pub use number::{format_number, parse_number};
