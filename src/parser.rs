//! # Ingredient Line Parser
//!
//! This module parses free-text recipe ingredient lines into structured data.
//! Two shapes are tried in order: an amount followed by a known measurement
//! unit, then an amount followed by a generic unit word. Anything else is
//! reported as unparsed rather than an error.
//!
//! ## Features
//!
//! - Amounts as integers or decimals; compound amounts ("2-3", "1/2") keep
//!   their leading numeric token and discard the remainder
//! - Known-unit recognition (tbsp, cups, oz, grams, cloves, ...)
//! - Trailing parenthetical notes ("(optional)", "(peeled and deveined)")
//! - Section-header detection so callers can skip lines like
//!   `"For the Peanut Sauce:"` before parsing
//!
//! ## Usage
//!
//! ```rust
//! use mealplan::parser::parse_line;
//!
//! let parsed = parse_line("2 tbsp vegetable oil").into_ingredient();
//! assert_eq!(parsed.quantity, 2.0);
//! assert_eq!(parsed.unit, "tbsp");
//! assert_eq!(parsed.name, "vegetable oil");
//! ```

use crate::ingredient::{ParsedIngredient, ParsedLine};
use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

// The amount is the longest leading numeric token. A range or fraction tail
// ("-3" in "2-3", "/2" in "1/2") is discarded, never evaluated.
const AMOUNT: &str = r"(?P<amount>\d+(?:\.\d+)?)(?:[-–—/]\S*)?";

// Known measurement units, longest spelling first where prefixes overlap.
const UNITS: &str = r"tablespoons?|tbsp|teaspoons?|tsp|cups?|pints?|quarts?|gallons?|fl\s?oz|ounces?|oz|pounds?|lbs?|kilograms?|kg|grams?|g|milliliters?|millilitres?|ml|liters?|litres?|l|cloves?|cans?|bottles?|packages?|pkg|pinch(?:es)?|dash(?:es)?|slices?|sticks?|bunch(?:es)?|heads?|stalks?|sprigs?";

/// Compiled regex patterns for the two recognized line shapes
struct LinePatterns {
    /// `"<amount> <known unit> <name>[ (<note>)]"`
    measured: Regex,
    /// `"<amount> <unit word> <name>[ (<note>)]"`
    generic: Regex,
}

impl LinePatterns {
    fn new() -> Self {
        Self {
            measured: Regex::new(&format!(
                r"^(?i){AMOUNT}\s+(?P<unit>{UNITS})\b\.?\s+(?P<name>.+?)(?:\s*\((?P<note>[^)]*)\))?\s*$"
            ))
            .expect("measured line pattern should be valid"),
            generic: Regex::new(&format!(
                r"^{AMOUNT}\s+(?P<unit>[A-Za-z][A-Za-z-]*)\s+(?P<name>.+?)(?:\s*\((?P<note>[^)]*)\))?\s*$"
            ))
            .expect("generic line pattern should be valid"),
        }
    }
}

lazy_static! {
    static ref LINE_PATTERNS: LinePatterns = LinePatterns::new();
}

/// Parse a single ingredient line.
///
/// Pure function: no side effects, never fails. Lines matching neither shape
/// come back as [`ParsedLine::Unparsed`]; callers decide whether to display
/// them verbatim or fall back to quantity 1 via
/// [`ParsedLine::into_ingredient`].
pub fn parse_line(line: &str) -> ParsedLine {
    let line = line.trim();

    for pattern in [&LINE_PATTERNS.measured, &LINE_PATTERNS.generic] {
        if let Some(captures) = pattern.captures(line) {
            // The amount group only admits digits and an optional decimal
            // point, so the parse cannot fail.
            let quantity: f64 = captures["amount"].parse().unwrap_or(1.0);
            let unit = captures["unit"].trim().to_string();
            let name = captures["name"].trim().to_string();

            let mut ingredient = ParsedIngredient::new(quantity, &name).with_unit(&unit);
            if let Some(note) = captures.name("note") {
                ingredient = ingredient.with_note(note.as_str().trim());
            }

            return ParsedLine::Parsed(ingredient);
        }
    }

    trace!("line did not match any ingredient shape: {:?}", line);
    ParsedLine::Unparsed(line.to_string())
}

/// Whether a line is a section header rather than an ingredient.
///
/// Headers have no leading numeral and end with a colon
/// (e.g. `"For the Peanut Sauce:"`). Callers skip these before parsing.
pub fn is_section_header(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty()
        && line.ends_with(':')
        && !line.starts_with(|c: char| c.is_ascii_digit())
}

/// Parse a full ingredient list, skipping blank lines and section headers.
pub fn parse_lines<'a, I>(lines: I) -> Vec<ParsedLine>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_section_header(line))
        .map(parse_line)
        .collect()
}
