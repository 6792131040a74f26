//! # Ingredient Data Model
//!
//! This module defines the data structures produced by the ingredient line
//! parser. Parsing is lossy and best-effort: a line either yields a structured
//! [`ParsedIngredient`] or is carried through verbatim as [`ParsedLine::Unparsed`],
//! and callers decide how to treat the unparsed remainder.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredient**: quantity + unit + name (+ optional parenthetical note)
//! - **ParsedLine**: the parse outcome, `Parsed` or `Unparsed`
//!
//! ## Usage
//!
//! ```rust
//! use mealplan::ingredient::ParsedIngredient;
//!
//! let oil = ParsedIngredient::new(2.0, "olive oil").with_unit("tablespoons");
//! assert_eq!(oil.to_string(), "2 tablespoons olive oil");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured ingredient extracted from one free-text line.
///
/// Recombining `quantity unit name (note)` reads close to the original line;
/// the parse is not guaranteed to be reversible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Amount of the ingredient. Defaults to 1 when the line had no usable amount.
    pub quantity: f64,

    /// Measurement unit as written (e.g. "tbsp", "cups"). Empty when the line
    /// carried no unit.
    #[serde(default)]
    pub unit: String,

    /// The ingredient noun phrase (e.g. "rice noodles", "olive oil").
    pub name: String,

    /// Trailing parenthetical, if any (e.g. "optional", "peeled and deveined").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ParsedIngredient {
    /// Create an ingredient with a quantity and name and no unit.
    pub fn new(quantity: f64, name: &str) -> Self {
        Self {
            quantity,
            unit: String::new(),
            name: name.to_string(),
            note: None,
        }
    }

    /// Attach a measurement unit.
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    /// Attach a parenthetical note.
    pub fn with_note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// Multiply the quantity, keeping unit, name, and note unchanged.
    pub fn scaled(&self, ratio: f64) -> Self {
        Self {
            quantity: self.quantity * ratio,
            ..self.clone()
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity.fract() == 0.0 {
            write!(f, "{}", self.quantity as i64)?;
        } else {
            write!(f, "{}", self.quantity)?;
        }

        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }

        write!(f, " {}", self.name)?;

        if let Some(note) = &self.note {
            write!(f, " ({})", note)?;
        }

        Ok(())
    }
}

/// Outcome of parsing one ingredient line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// The line matched one of the recognized shapes.
    Parsed(ParsedIngredient),

    /// The line matched neither shape and is kept verbatim.
    Unparsed(String),
}

impl ParsedLine {
    /// Whether the line was structurally parsed.
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedLine::Parsed(_))
    }

    /// Resolve to an ingredient, applying the documented fallback for
    /// unparsed lines: quantity 1, no unit, the entire line as the name.
    pub fn into_ingredient(self) -> ParsedIngredient {
        match self {
            ParsedLine::Parsed(ingredient) => ingredient,
            ParsedLine::Unparsed(line) => ParsedIngredient::new(1.0, &line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_creation() {
        let ingredient = ParsedIngredient::new(2.0, "olive oil")
            .with_unit("tablespoons")
            .with_note("extra virgin");

        assert_eq!(ingredient.quantity, 2.0);
        assert_eq!(ingredient.unit, "tablespoons");
        assert_eq!(ingredient.name, "olive oil");
        assert_eq!(ingredient.note, Some("extra virgin".to_string()));
    }

    #[test]
    fn test_scaled_keeps_everything_but_quantity() {
        let ingredient = ParsedIngredient::new(3.0, "fish sauce").with_unit("tablespoons");
        let scaled = ingredient.scaled(0.5);

        assert_eq!(scaled.quantity, 1.5);
        assert_eq!(scaled.unit, "tablespoons");
        assert_eq!(scaled.name, "fish sauce");
    }

    #[test]
    fn test_display_recombines_line() {
        let ingredient = ParsedIngredient::new(8.0, "rice noodles").with_unit("oz");
        assert_eq!(ingredient.to_string(), "8 oz rice noodles");

        let fractional = ParsedIngredient::new(1.5, "brown sugar").with_unit("tbsp");
        assert_eq!(fractional.to_string(), "1.5 tbsp brown sugar");

        let noted = ParsedIngredient::new(2.0, "eggs").with_note("whisked");
        assert_eq!(noted.to_string(), "2 eggs (whisked)");
    }

    #[test]
    fn test_unparsed_fallback() {
        let line = ParsedLine::Unparsed("Steamed white rice, for serving".to_string());
        assert!(!line.is_parsed());

        let ingredient = line.into_ingredient();
        assert_eq!(ingredient.quantity, 1.0);
        assert_eq!(ingredient.unit, "");
        assert_eq!(ingredient.name, "Steamed white rice, for serving");
    }
}
