//! uconv - free-form unit conversion phrases
//!
//! ```text
//! "5 feet to meters"                       -> "5.0 feet is 1.524 meters"
//! "0 degrees Celsius to degrees Fahrenheit" -> "0.0 degrees Celsius is 32.0 degrees Fahrenheit"
//! "-3 kg to pounds"                        -> "Weight shouldn't be negative"
//! "hello world"                            -> "Parse error"
//! ```
//!
//! Pipeline: tokenizer -> parser -> converter -> renderer. Every stage is a
//! pure function; the only shared data is the read-only unit table.

mod tokenizer;
mod parser;
mod convert;
mod render;
mod error;

pub use parser::{parse, ParsedQuantity};
pub use convert::{convert_quantity, Conversion};
pub use error::Rejection;

pub use uconv_core::{format_number, ParseError, UnitRole};
pub use uconv_units::{ConversionError, Dimension, Unit, UnitId, UNITS};

use tracing::debug;

/// Parse and convert a phrase, keeping the structured result
pub fn evaluate(input: &str) -> Result<Conversion, Rejection> {
    let quantity = parse(input).inspect_err(|e| debug!(input, reason = %e, "rejected phrase"))?;
    Ok(convert_quantity(&quantity)?)
}

/// Convert a phrase and return the sentence to show the user
///
/// Never fails: structural problems become "Parse error", semantic ones a
/// specific sentence.
pub fn convert(input: &str) -> String {
    match evaluate(input) {
        Ok(conversion) => conversion.to_string(),
        Err(rejection) => rejection.to_string(),
    }
}
