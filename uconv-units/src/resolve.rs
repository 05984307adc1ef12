//! Unit token resolution
//!
//! A unit is written as one token ("km", "Feet", "f") or as a degree pair
//! ("degrees Celsius"). Tokens are case-folded before lookup. Anything that
//! does not match resolves to the sentinel rather than failing.

use tracing::trace;

use crate::units::{null_unit, UNITS};
use crate::Unit;

/// Words that introduce a two-token temperature unit
pub const DEGREE_WORDS: [&str; 2] = ["degree", "degrees"];

/// Check if a token opens a degree pair
pub fn is_degree_word(token: &str) -> bool {
    let lower = token.to_lowercase();
    DEGREE_WORDS.contains(&lower.as_str())
}

/// Resolve one token, or a "degree(s) X" pair, to a unit
///
/// Any other shape (no tokens, two tokens without the degree prefix, more
/// than two tokens) yields the sentinel.
pub fn resolve(tokens: &[&str]) -> &'static Unit {
    match tokens {
        [prefix, word] if is_degree_word(prefix) => resolve_degree(word),
        [word] => resolve_word(word),
        _ => null_unit(),
    }
}

/// Look up a single token against the full alias table
pub fn resolve_word(token: &str) -> &'static Unit {
    let unit = UNITS.get(&token.to_lowercase()).unwrap_or_else(null_unit);
    trace!(token, unit = ?unit.id, "resolved unit token");
    unit
}

/// Look up the word after "degree"/"degrees"; only Celsius and Fahrenheit qualify
pub fn resolve_degree(token: &str) -> &'static Unit {
    let unit = UNITS.get_degree(&token.to_lowercase()).unwrap_or_else(null_unit);
    trace!(token, unit = ?unit.id, "resolved degree unit");
    unit
}
