//! Unit records and the linear transform between them

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Dimension;

/// Key into the unit table
///
/// Discriminants are the row positions in [`crate::UNIT_TABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitId {
    /// Unrecognised unit
    Null,

    Meter,
    Kilometer,
    Centimeter,
    Millimeter,
    Mile,
    Yard,
    Foot,
    Inch,

    Gram,
    Kilogram,
    Milligram,
    Pound,
    Ounce,

    Celsius,
    Kelvin,
    Fahrenheit,
}

/// Immutable description of one unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Unit {
    pub id: UnitId,
    pub dimension: Dimension,
    /// Display form for a value of exactly 1.0
    pub singular: &'static str,
    /// Display form for every other value
    pub plural: &'static str,
    /// Scale relative to the dimension's reference unit
    pub multiplier: f64,
    /// Shift removed before scaling (temperature only)
    pub offset: f64,
    /// Lowercase single-token spellings
    #[serde(skip)]
    pub aliases: &'static [&'static str],
    /// Word accepted after "degree"/"degrees"
    #[serde(skip)]
    pub degree_alias: Option<&'static str>,
}

impl Unit {
    pub fn is_null(&self) -> bool {
        self.id == UnitId::Null
    }

    /// Singular name for exactly 1.0, plural for anything else (0, negatives, fractions, NaN)
    pub fn display_name(&self, value: f64) -> &'static str {
        if value == 1.0 {
            self.singular
        } else {
            self.plural
        }
    }

    /// Check if two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        !self.is_null() && !other.is_null() && self.dimension == other.dimension
    }

    /// Value expressed on the dimension's reference scale
    pub fn to_reference(&self, value: f64) -> f64 {
        (value - self.offset) * self.multiplier
    }

    /// Inverse of [`Unit::to_reference`]
    pub fn from_reference(&self, reference: f64) -> f64 {
        reference / self.multiplier + self.offset
    }

    /// Convert a value from this unit to another unit
    ///
    /// Checks, in order: compatibility, then the sign rule of the dimension.
    pub fn convert_to(&self, value: f64, target: &Unit) -> Result<f64, ConversionError> {
        if !self.is_compatible(target) {
            return Err(ConversionError::Impossible {
                from: self.plural,
                to: target.plural,
            });
        }

        if value < 0.0 && self.dimension.rejects_negative() {
            return Err(match self.dimension {
                Dimension::Mass => ConversionError::NegativeWeight,
                _ => ConversionError::NegativeLength,
            });
        }

        Ok(target.from_reference(self.to_reference(value)))
    }
}

/// A conversion that is well formed but cannot be carried out
///
/// The `Display` text is the sentence shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Unrecognised unit on either side, or mismatched dimensions
    #[error("Conversion from {from} to {to} is impossible")]
    Impossible {
        from: &'static str,
        to: &'static str,
    },

    #[error("Length shouldn't be negative")]
    NegativeLength,

    #[error("Weight shouldn't be negative")]
    NegativeWeight,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter() -> Unit {
        Unit {
            id: UnitId::Meter,
            dimension: Dimension::Length,
            singular: "meter",
            plural: "meters",
            multiplier: 1.0,
            offset: 0.0,
            aliases: &["meter", "meters", "m"],
            degree_alias: None,
        }
    }

    fn kilometer() -> Unit {
        Unit {
            id: UnitId::Kilometer,
            dimension: Dimension::Length,
            singular: "kilometer",
            plural: "kilometers",
            multiplier: 1000.0,
            offset: 0.0,
            aliases: &["kilometer", "kilometers", "km"],
            degree_alias: None,
        }
    }

    fn gram() -> Unit {
        Unit {
            id: UnitId::Gram,
            dimension: Dimension::Mass,
            singular: "gram",
            plural: "grams",
            multiplier: 1.0,
            offset: 0.0,
            aliases: &["gram", "grams", "g"],
            degree_alias: None,
        }
    }

    fn kelvin() -> Unit {
        Unit {
            id: UnitId::Kelvin,
            dimension: Dimension::Temperature,
            singular: "Kelvin",
            plural: "Kelvins",
            multiplier: 1.0,
            offset: 273.15,
            aliases: &["kelvin", "kelvins", "k"],
            degree_alias: None,
        }
    }

    fn null() -> Unit {
        Unit {
            id: UnitId::Null,
            dimension: Dimension::None,
            singular: "???",
            plural: "???",
            multiplier: 1.0,
            offset: 0.0,
            aliases: &[],
            degree_alias: None,
        }
    }

    #[test]
    fn test_display_name_boundary() {
        let m = meter();
        assert_eq!(m.display_name(1.0), "meter");
        assert_eq!(m.display_name(0.0), "meters");
        assert_eq!(m.display_name(-1.0), "meters");
        assert_eq!(m.display_name(1.5), "meters");
        assert_eq!(m.display_name(f64::NAN), "meters");
    }

    #[test]
    fn test_compatible_units() {
        assert!(meter().is_compatible(&kilometer()));
        assert!(!meter().is_compatible(&gram()));
        assert!(!null().is_compatible(&null()));
        assert!(!null().is_compatible(&meter()));
    }

    #[test]
    fn test_unit_conversion() {
        let converted = meter().convert_to(5000.0, &kilometer()).unwrap();
        assert_eq!(converted, 5.0);
    }

    #[test]
    fn test_offset_conversion() {
        let k = kelvin();
        assert_eq!(k.to_reference(273.15), 0.0);
        assert_eq!(k.from_reference(0.0), 273.15);
    }

    #[test]
    fn test_impossible_uses_plural_names() {
        let err = meter().convert_to(10.0, &gram()).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from meters to grams is impossible");

        let err = null().convert_to(10.0, &meter()).unwrap_err();
        assert_eq!(err.to_string(), "Conversion from ??? to meters is impossible");
    }

    #[test]
    fn test_negative_rules() {
        assert_eq!(
            meter().convert_to(-1.0, &kilometer()),
            Err(ConversionError::NegativeLength)
        );
        assert_eq!(gram().convert_to(-0.5, &gram()), Err(ConversionError::NegativeWeight));
        assert!(kelvin().convert_to(-10.0, &kelvin()).is_ok());
        // -0.0 is not below zero
        assert!(meter().convert_to(-0.0, &kilometer()).is_ok());
    }

    #[test]
    fn test_dimension_checked_before_sign() {
        let err = meter().convert_to(-3.0, &gram()).unwrap_err();
        assert!(matches!(err, ConversionError::Impossible { .. }));
    }
}
