//! uconv Units - the fixed unit table
//!
//! Every supported unit is an immutable record in a static table keyed by
//! [`UnitId`]. Conversion is linear within a dimension:
//! `target = (value - from.offset) * from.multiplier / to.multiplier + to.offset`
//!
//! Categories:
//! - Length (m, km, cm, mm, mi, yd, ft, in)
//! - Mass (g, kg, mg, lb, oz)
//! - Temperature (degrees Celsius, Kelvin, degrees Fahrenheit)

mod dimension;
mod unit;
mod units;
mod resolve;

pub use dimension::Dimension;
pub use unit::{ConversionError, Unit, UnitId};
pub use units::{null_unit, UnitRegistry, UNITS, UNIT_TABLE};
pub use resolve::{is_degree_word, resolve, resolve_degree, resolve_word, DEGREE_WORDS};
