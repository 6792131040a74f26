//! # Shopping List
//!
//! The shopping list holds manually-typed items and items produced by the
//! ingredient calculation. Recipe-derived items keep their provenance (recipe
//! id and title plus the source line) and are deduplicated on
//! `(name, recipe id)`; manual items carry no provenance and never count as
//! duplicates of recipe-derived candidates.
//!
//! Items snapshot the quantity computed at calculation time and are never
//! rescaled when a serving size later changes. Nothing is removed
//! automatically; the user deletes or clears explicitly.

use crate::scale::ScaledIngredient;
use crate::store::{load_collection, save_collection, Storage};
use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key for the persisted shopping-list collection.
pub const SHOPPING_LIST_KEY: &str = "shoppingList";

/// Fixed hand-off target for grocery ordering. Opened externally; there is no
/// vendor integration.
pub const GROCERY_ORDER_URL: &str = "https://www.instacart.com/store";

/// Category assigned when a manual item leaves the field blank.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Where a shopping item came from.
///
/// Serialized inline with the item: recipe-derived items carry `recipeId` /
/// `recipeName` (and optionally `sourceLine`) fields, manual items carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Provenance {
    FromRecipe {
        #[serde(rename = "recipeId")]
        recipe_id: String,
        #[serde(rename = "recipeName")]
        recipe_name: String,
        #[serde(
            rename = "sourceLine",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        source_line: Option<String>,
    },
    Manual {},
}

/// One shopping-list item, manual or recipe-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: String,
    /// Resolved ingredient name. The legacy `ingredient` field name is
    /// accepted when reading old data.
    #[serde(alias = "ingredient")]
    pub name: String,
    /// Already formatted for display, e.g. "2 tbsp".
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(flatten)]
    pub source: Provenance,
}

impl ShoppingItem {
    pub fn recipe_id(&self) -> Option<&str> {
        match &self.source {
            Provenance::FromRecipe { recipe_id, .. } => Some(recipe_id),
            Provenance::Manual {} => None,
        }
    }
}

/// Whether a scaled candidate already has a matching item in the list:
/// same resolved name and same recipe id. Manual items never match.
pub fn is_duplicate(candidate: &ScaledIngredient, items: &[ShoppingItem]) -> bool {
    items.iter().any(|item| {
        item.recipe_id() == Some(candidate.recipe_id.as_str())
            && item.name.eq_ignore_ascii_case(&candidate.name)
    })
}

/// Result of a manual add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManualAddOutcome {
    Added { id: String },
    EmptyName,
}

impl fmt::Display for ManualAddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManualAddOutcome::Added { .. } => write!(f, "Item added"),
            ManualAddOutcome::EmptyName => write!(f, "Please enter an item name"),
        }
    }
}

/// Result of adding scaled candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CandidateAddSummary {
    pub added: usize,
    pub duplicates: usize,
}

impl fmt::Display for CandidateAddSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.added == 0 && self.duplicates == 0 {
            write!(f, "No ingredients selected")
        } else if self.duplicates == 0 {
            write!(f, "{} ingredient(s) added to your shopping list", self.added)
        } else {
            write!(
                f,
                "{} ingredient(s) added, {} already on the list",
                self.added, self.duplicates
            )
        }
    }
}

/// Result of clearing checked items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearCheckedOutcome {
    Cleared(usize),
    NothingToClear,
}

impl fmt::Display for ClearCheckedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearCheckedOutcome::Cleared(count) => {
                write!(f, "{count} checked item(s) have been removed")
            }
            ClearCheckedOutcome::NothingToClear => {
                write!(f, "There are no checked items to clear")
            }
        }
    }
}

/// Controller over the persisted shopping-list collection.
pub struct ShoppingList<S: Storage> {
    store: S,
    items: Vec<ShoppingItem>,
}

impl<S: Storage> ShoppingList<S> {
    /// Load the list from storage; missing or corrupt data starts empty.
    pub fn load(store: S) -> Self {
        let items: Vec<ShoppingItem> = load_collection(&store, SHOPPING_LIST_KEY);
        debug!("Loaded {} shopping item(s)", items.len());
        Self { store, items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Add a manually-typed item. A blank quantity defaults to "1", a blank
    /// category to [`DEFAULT_CATEGORY`]; a blank name is a notice, not an
    /// error.
    pub fn add_manual(
        &mut self,
        name: &str,
        quantity: &str,
        category: &str,
    ) -> Result<ManualAddOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(ManualAddOutcome::EmptyName);
        }

        let quantity = quantity.trim();
        let category = category.trim();
        let item = ShoppingItem {
            id: self.next_id(),
            name: name.to_string(),
            quantity: if quantity.is_empty() { "1".to_string() } else { quantity.to_string() },
            category: if category.is_empty() {
                DEFAULT_CATEGORY.to_string()
            } else {
                category.to_string()
            },
            checked: false,
            source: Provenance::Manual {},
        };

        let id = item.id.clone();
        info!("Added {} to the shopping list", item.name);
        self.items.push(item);
        self.persist()?;
        Ok(ManualAddOutcome::Added { id })
    }

    /// Add scaled candidates, skipping any whose `(name, recipe id)` is
    /// already on the list. Existing entries are left untouched.
    pub fn add_candidates(
        &mut self,
        candidates: &[ScaledIngredient],
        category: &str,
    ) -> Result<CandidateAddSummary> {
        let mut summary = CandidateAddSummary::default();

        for candidate in candidates {
            if is_duplicate(candidate, &self.items) {
                debug!(
                    "Skipping duplicate {} from {}",
                    candidate.name, candidate.recipe_name
                );
                summary.duplicates += 1;
                continue;
            }

            let id = self.next_id();
            self.items.push(ShoppingItem {
                id,
                name: candidate.name.clone(),
                quantity: candidate.display_quantity(),
                category: category.to_string(),
                checked: false,
                source: Provenance::FromRecipe {
                    recipe_id: candidate.recipe_id.clone(),
                    recipe_name: candidate.recipe_name.clone(),
                    source_line: Some(candidate.source_line.clone()),
                },
            });
            summary.added += 1;
        }

        if summary.added > 0 {
            info!(
                "Added {} scaled ingredient(s), skipped {} duplicate(s)",
                summary.added, summary.duplicates
            );
            self.persist()?;
        }
        Ok(summary)
    }

    /// Flip an item's checked state; returns false when the id is unknown.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return Ok(false);
        };
        item.checked = !item.checked;
        self.persist()?;
        Ok(true)
    }

    /// Delete one item, returning it for the removal notice.
    pub fn remove(&mut self, id: &str) -> Result<Option<ShoppingItem>> {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            return Ok(None);
        };
        let removed = self.items.remove(index);
        info!("Removed {} from the shopping list", removed.name);
        self.persist()?;
        Ok(Some(removed))
    }

    /// Remove every checked item.
    pub fn clear_checked(&mut self) -> Result<ClearCheckedOutcome> {
        let checked = self.items.iter().filter(|item| item.checked).count();
        if checked == 0 {
            return Ok(ClearCheckedOutcome::NothingToClear);
        }

        self.items.retain(|item| !item.checked);
        info!("Cleared {} checked item(s)", checked);
        self.persist()?;
        Ok(ClearCheckedOutcome::Cleared(checked))
    }

    /// Items grouped by category, groups and their contents in stable order,
    /// group names sorted.
    pub fn grouped(&self) -> Vec<(String, Vec<&ShoppingItem>)> {
        let mut groups: Vec<(String, Vec<&ShoppingItem>)> = Vec::new();
        for item in &self.items {
            match groups.iter_mut().find(|(category, _)| *category == item.category) {
                Some((_, items)) => items.push(item),
                None => groups.push((item.category.clone(), vec![item])),
            }
        }
        groups.sort_by(|a, b| a.0.cmp(&b.0));
        groups
    }

    /// Sorted, de-duplicated category list.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.items.iter().map(|item| item.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Plain-text export, grouped by category.
    pub fn export_text(&self) -> String {
        let mut out = String::new();
        for (category, items) in self.grouped() {
            out.push_str(&category.to_uppercase());
            out.push('\n');
            for item in items {
                let mark = if item.checked { 'x' } else { ' ' };
                out.push_str(&format!("[{}] {} — {}\n", mark, item.name, item.quantity));
            }
            out.push('\n');
        }
        out
    }

    // Ids follow the original data's numeric-string convention.
    fn next_id(&self) -> String {
        let max = self
            .items
            .iter()
            .filter_map(|item| item.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        (max + 1).to_string()
    }

    fn persist(&self) -> Result<()> {
        save_collection(&self.store, SHOPPING_LIST_KEY, &self.items)
    }
}
