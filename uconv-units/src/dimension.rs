//! Dimension tags
//!
//! Two units are convertible only when they share a dimension other than
//! [`Dimension::None`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Carried only by the unrecognised-unit sentinel
    #[default]
    None,
    Length,
    Mass,
    Temperature,
}

impl Dimension {
    /// Dimensions that real units belong to
    pub const MEASURABLE: [Dimension; 3] = [
        Dimension::Length,
        Dimension::Mass,
        Dimension::Temperature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::None => "none",
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Temperature => "temperature",
        }
    }

    /// Whether negative magnitudes are meaningless in this dimension
    pub fn rejects_negative(&self) -> bool {
        matches!(self, Dimension::Length | Dimension::Mass)
    }
}

#[cfg(test)]
impl Dimension {
    /// The unit with multiplier 1 and offset 0 that the other units are scaled against
    pub(crate) fn reference_unit(&self) -> Option<crate::UnitId> {
        use crate::UnitId;

        match self {
            Dimension::None => None,
            Dimension::Length => Some(UnitId::Meter),
            Dimension::Mass => Some(UnitId::Gram),
            Dimension::Temperature => Some(UnitId::Celsius),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
