//! Conversion of a parsed quantity
//!
//! Decision order, first match wins: unknown or mismatched units, negative
//! length, negative weight, then the linear transform.

use serde::Serialize;
use tracing::debug;
use uconv_units::{ConversionError, Unit};

use crate::parser::ParsedQuantity;

/// A completed conversion, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub source_value: f64,
    pub source_unit: &'static Unit,
    pub target_value: f64,
    pub target_unit: &'static Unit,
}

/// Apply the dimension and sign checks, then convert
pub fn convert_quantity(quantity: &ParsedQuantity) -> Result<Conversion, ConversionError> {
    let ParsedQuantity { source_value, source_unit, target_unit } = *quantity;

    let target_value = source_unit
        .convert_to(source_value, target_unit)
        .inspect_err(|e| debug!(error = %e, "conversion refused"))?;

    debug!(source_value, target_value, "converted");

    Ok(Conversion {
        source_value,
        source_unit,
        target_value,
        target_unit,
    })
}
