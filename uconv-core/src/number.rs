//! Reading and echoing quantities
//!
//! Rendering follows the usual double-to-string notation: shortest digits
//! that round-trip, plain decimal with at least one fractional digit for
//! magnitudes in [1e-3, 1e7), scientific with a capital `E` otherwise.

use crate::ParseError;

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Parse a whole token as a floating point number
/// Supports: "5", "-3", "2.5", ".5", "1e3", "+7"
///
/// Only decimal notation is accepted; "inf", "NaN" and friends are not numbers here.
pub fn parse_number(token: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidNumber(token.to_string());

    if !token.bytes().all(is_decimal_byte) {
        return Err(invalid());
    }
    token.parse::<f64>().map_err(|_| invalid())
}

fn is_decimal_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'+' | b'-' | b'.' | b'e' | b'E')
}

/// Render a value the way it is echoed back to the user
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        let text = if value.is_sign_negative() { "-0.0" } else { "0.0" };
        return text.to_string();
    }

    if (PLAIN_MIN..PLAIN_MAX).contains(&value.abs()) {
        let digits = value.to_string();
        if digits.contains('.') {
            digits
        } else {
            format!("{}.0", digits)
        }
    } else {
        scientific(value)
    }
}

fn scientific(value: f64) -> String {
    // `{:e}` gives the shortest mantissa: "1e7", "-1.5e-5"
    let raw = format!("{:e}", value);
    let (mantissa, exponent) = match raw.split_once('e') {
        Some(parts) => parts,
        None => (raw.as_str(), "0"),
    };

    if mantissa.contains('.') {
        format!("{}E{}", mantissa, exponent)
    } else {
        format!("{}.0E{}", mantissa, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("5").unwrap(), 5.0);
        assert_eq!(parse_number("-3").unwrap(), -3.0);
        assert_eq!(parse_number("2.5").unwrap(), 2.5);
        assert_eq!(parse_number(".5").unwrap(), 0.5);
        assert_eq!(parse_number("1e3").unwrap(), 1000.0);
        assert_eq!(parse_number("+7").unwrap(), 7.0);
    }

    #[test]
    fn test_parse_number_rejects_words() {
        assert_eq!(
            parse_number("hello"),
            Err(ParseError::InvalidNumber("hello".to_string()))
        );
        assert!(parse_number("5km").is_err());
        assert!(parse_number("1,5").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_parse_number_rejects_non_finite_spellings() {
        for token in ["inf", "-inf", "+inf", "infinity", "Infinity", "nan", "NaN", "-NaN"] {
            assert_eq!(
                parse_number(token),
                Err(ParseError::InvalidNumber(token.to_string())),
                "{} should not parse",
                token
            );
        }
        assert!(parse_number("1e").is_err());
        assert!(parse_number("--5").is_err());
        assert_eq!(parse_number("-2.5E-3").unwrap(), -0.0025);
    }

    #[test]
    fn test_format_whole_numbers_keep_fraction() {
        assert_eq!(format_number(5.0), "5.0");
        assert_eq!(format_number(32.0), "32.0");
        assert_eq!(format_number(-3.0), "-3.0");
        assert_eq!(format_number(1.0), "1.0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(1.524), "1.524");
        assert_eq!(format_number(0.001), "0.001");
        assert_eq!(format_number(2.2046244201837775), "2.2046244201837775");
        assert_eq!(format_number(274.15), "274.15");
        assert_eq!(format_number(9999999.5), "9999999.5");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_number(1e7), "1.0E7");
        assert_eq!(format_number(1.5e10), "1.5E10");
        assert_eq!(format_number(0.0001), "1.0E-4");
        assert_eq!(format_number(-1.5e-5), "-1.5E-5");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-0.0), "-0.0");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }
}
