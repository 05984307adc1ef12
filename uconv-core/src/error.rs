//! Structural parse errors
//!
//! Every variant is reported to the user as the same literal text
//! ([`PARSE_ERROR_MESSAGE`]); the variant itself only matters for logs.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the user sees for any structural failure
pub const PARSE_ERROR_MESSAGE: &str = "Parse error";

/// Which unit slot of a phrase is being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitRole {
    Source,
    Target,
}

impl fmt::Display for UnitRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitRole::Source => write!(f, "source"),
            UnitRole::Target => write!(f, "target"),
        }
    }
}

/// A phrase that does not match `<number> <unit> <filler> <unit>`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected a number, found an empty phrase")]
    MissingNumber,

    #[error("invalid number: {0}")]
    InvalidNumber(String),

    #[error("missing {role} unit")]
    MissingUnit { role: UnitRole },

    #[error("missing {role} unit after '{prefix}'")]
    DanglingDegree { role: UnitRole, prefix: String },

    #[error("missing filler word before the target unit")]
    MissingFiller,

    #[error("unexpected trailing tokens: {}", .0.join(" "))]
    TrailingTokens(Vec<String>),
}

impl ParseError {
    /// Text shown to the user, identical for every variant
    pub fn user_message(&self) -> &'static str {
        PARSE_ERROR_MESSAGE
    }
}
