//! Why a phrase produced no conversion

use thiserror::Error;
use uconv_core::{ParseError, PARSE_ERROR_MESSAGE};
use uconv_units::ConversionError;

/// Either tier of failure; `Display` is the text shown to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// The phrase does not fit the grammar
    #[error("{}", PARSE_ERROR_MESSAGE)]
    Parse(#[from] ParseError),

    /// The phrase parsed but the units cannot be converted
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use uconv_core::UnitRole;

    #[test]
    fn test_parse_rejection_hides_detail() {
        let r = Rejection::from(ParseError::MissingUnit { role: UnitRole::Target });
        assert_eq!(r.to_string(), "Parse error");
    }

    #[test]
    fn test_conversion_rejection_is_sentence() {
        let r = Rejection::from(ConversionError::NegativeLength);
        assert_eq!(r.to_string(), "Length shouldn't be negative");
    }

    #[test]
    fn test_parse_detail_kept_as_source() {
        use std::error::Error as _;
        let r = Rejection::from(ParseError::MissingFiller);
        let source = r.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("missing filler word before the target unit"));
    }
}
