//! # Serving-Ratio Scaling
//!
//! Support for scaling a recipe's ingredient quantities from its base serving
//! count to a target serving size. Quantities keep full floating-point
//! precision; rounding happens only when formatting for display.

use crate::ingredient::ParsedIngredient;
use crate::parser::{is_section_header, parse_line};
use crate::recipe::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Compute the scaling factor for a target serving size.
///
/// A base of 0 (a recipe with no usable serving count) yields a ratio of 1.0
/// so that scaling degrades to a pass-through instead of failing.
pub fn serving_ratio(target_servings: u32, base_servings: u32) -> f64 {
    if base_servings == 0 {
        1.0
    } else {
        f64::from(target_servings) / f64::from(base_servings)
    }
}

/// A scaled ingredient entry tagged with its recipe provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    pub name: String,
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub recipe_id: String,
    pub recipe_name: String,
    /// The free-text line the entry was scaled from.
    pub source_line: String,
}

impl ScaledIngredient {
    /// Display string for the quantity + unit pair, e.g. "16 oz" or "2".
    pub fn display_quantity(&self) -> String {
        if self.unit.is_empty() {
            format_quantity(self.quantity)
        } else {
            format!("{} {}", format_quantity(self.quantity), self.unit)
        }
    }
}

impl fmt::Display for ScaledIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_quantity(), self.name)
    }
}

/// Scale every ingredient line of a recipe to the target serving size.
///
/// Section headers are skipped. Unparseable lines are carried through at
/// quantity 1 with the whole line as the name, so nothing is silently dropped.
pub fn scale_recipe(recipe: &Recipe, target_servings: u32) -> Vec<ScaledIngredient> {
    let ratio = serving_ratio(target_servings, recipe.servings);

    recipe
        .ingredients
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !is_section_header(line))
        .map(|line| {
            let ParsedIngredient {
                quantity,
                unit,
                name,
                note,
            } = parse_line(line).into_ingredient();

            ScaledIngredient {
                name,
                quantity: quantity * ratio,
                unit,
                note,
                recipe_id: recipe.id.clone(),
                recipe_name: recipe.title.clone(),
                source_line: line.to_string(),
            }
        })
        .collect()
}

/// Format a quantity for display: at most two decimal places, trailing zeros
/// trimmed. The stored value itself is never rounded.
pub fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        return format!("{}", quantity as i64);
    }

    let mut formatted = format!("{:.2}", quantity);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    if formatted.ends_with('.') {
        formatted.pop();
    }
    formatted
}
