//! Phrase parser
//!
//! Grammar, whitespace delimited, nothing may follow the target unit:
//!
//! ```text
//! phrase := number unit filler unit
//! unit   := ("degree" | "degrees") word | word
//! ```
//!
//! Only structure is checked here. An unrecognised unit word still parses
//! and resolves to the sentinel; the converter reports it.

use serde::Serialize;
use tracing::debug;
use uconv_core::{parse_number, ParseError, UnitRole};
use uconv_units::{is_degree_word, resolve_degree, resolve_word, Unit};

use crate::tokenizer::TokenStream;

/// A structurally valid request, one per input line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    pub source_value: f64,
    pub source_unit: &'static Unit,
    pub target_unit: &'static Unit,
}

/// Parse a phrase such as "5 feet to meters" or "-40 degrees Celsius in f"
pub fn parse(input: &str) -> Result<ParsedQuantity, ParseError> {
    let mut tokens = TokenStream::new(input);

    let number = tokens.next().ok_or(ParseError::MissingNumber)?;
    let source_value = parse_number(number)?;

    let source_unit = parse_unit(&mut tokens, UnitRole::Source)?;

    // The filler word ("to", "in", "into", ...) is never inspected
    tokens.next().ok_or(ParseError::MissingFiller)?;

    let target_unit = parse_unit(&mut tokens, UnitRole::Target)?;

    if !tokens.is_exhausted() {
        let rest = tokens.rest().iter().map(|t| t.to_string()).collect();
        return Err(ParseError::TrailingTokens(rest));
    }

    debug!(
        source_value,
        source = ?source_unit.id,
        target = ?target_unit.id,
        "parsed phrase"
    );

    Ok(ParsedQuantity {
        source_value,
        source_unit,
        target_unit,
    })
}

/// Consume one unit: a single token, or two when the first is "degree"/"degrees"
fn parse_unit(tokens: &mut TokenStream<'_>, role: UnitRole) -> Result<&'static Unit, ParseError> {
    let word = tokens.next().ok_or(ParseError::MissingUnit { role })?;

    if !is_degree_word(word) {
        return Ok(resolve_word(word));
    }

    let scale = tokens.next().ok_or_else(|| ParseError::DanglingDegree {
        role,
        prefix: word.to_string(),
    })?;
    Ok(resolve_degree(scale))
}
