//! # Recipe Catalog
//!
//! Immutable recipe records and the catalog they live in. The catalog is
//! defined at build time (see [`crate::catalog_data`]) or loaded from JSON;
//! records are never mutated.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A catalog entry. The ingredient list is written for `servings` people;
/// free-text lines may be interspersed with section headers such as
/// `"For the Peanut Sauce:"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// Preparation time in minutes.
    #[serde(default)]
    pub prep_time: u32,
    /// Base serving count the ingredient quantities are written for.
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl Recipe {
    pub fn new(id: &str, title: &str, servings: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            category: String::new(),
            prep_time: 0,
            servings,
            ingredients: Vec::new(),
            instructions: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions(mut self, instructions: Vec<String>) -> Self {
        self.instructions = instructions;
        self
    }
}

/// Read-only collection of recipes with lookup, search, and filtering.
#[derive(Debug, Clone)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> Self {
        Self::new(crate::catalog_data::builtin_recipes())
    }

    /// Load a catalog from a JSON array of recipes.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let recipes: Vec<Recipe> =
            serde_json::from_str(json).context("Failed to parse recipe catalog JSON")?;
        Ok(Self::new(recipes))
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Case-insensitive substring search over title and description.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Recipe> {
        let query = query.trim().to_lowercase();
        self.recipes
            .iter()
            .filter(|recipe| {
                query.is_empty()
                    || recipe.title.to_lowercase().contains(&query)
                    || recipe.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Recipes in the given category (case-insensitive).
    pub fn by_category(&self, category: &str) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Sorted, de-duplicated category list.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .recipes
            .iter()
            .map(|recipe| recipe.category.clone())
            .filter(|category| !category.is_empty())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// A uniformly random recipe, if the catalog is non-empty.
    pub fn random(&self) -> Option<&Recipe> {
        self.recipes.choose(&mut rand::thread_rng())
    }
}
