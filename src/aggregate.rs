//! # Ingredient Calculation
//!
//! Turns planned meals into shopping-list candidates: each meal dated
//! today-or-later is resolved to its recipe, the recipe's ingredient lines
//! are scaled by that date's serving ratio, and the scaled entries are merged
//! into one flat sequence. Entries are never summed across recipes, even when
//! names match textually; candidates already on the shopping list are
//! annotated rather than dropped, so the user always sees the full list with
//! duplicate status attached.

use crate::planner::MealPlan;
use crate::recipe::RecipeCatalog;
use crate::scale::{scale_recipe, ScaledIngredient};
use crate::shopping::{is_duplicate, ShoppingItem};
use chrono::NaiveDate;
use log::debug;

/// A scaled entry plus its duplicate status against the shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingCandidate {
    pub scaled: ScaledIngredient,
    /// An item with the same resolved name and recipe id already exists.
    pub already_listed: bool,
}

/// Compute shopping-list candidates from planned meals.
///
/// Meals dated before `today` are excluded (dates are compared as calendar
/// days, with no time-of-day component). Passing `restrict_to` replaces the
/// today-or-later default with a single explicit date. Meals whose recipe
/// cannot be resolved are skipped with a debug log.
pub fn calculate_candidates(
    plans: &[MealPlan],
    catalog: &RecipeCatalog,
    existing: &[ShoppingItem],
    today: NaiveDate,
    restrict_to: Option<NaiveDate>,
) -> Vec<ShoppingCandidate> {
    let mut candidates = Vec::new();

    for plan in plans {
        let included = match restrict_to {
            Some(date) => plan.date == date,
            None => plan.date >= today,
        };
        if !included {
            debug!("Skipping meals on {} (outside calculation window)", plan.date);
            continue;
        }

        for meal in &plan.meals {
            let Some(recipe_id) = meal.recipe_id.as_deref() else {
                debug!("Meal {} has no recipe reference, skipping", meal.id);
                continue;
            };
            let Some(recipe) = catalog.get(recipe_id) else {
                debug!("Recipe {} not in catalog, skipping meal {}", recipe_id, meal.id);
                continue;
            };

            for scaled in scale_recipe(recipe, plan.serving_size) {
                let already_listed = is_duplicate(&scaled, existing);
                candidates.push(ShoppingCandidate {
                    scaled,
                    already_listed,
                });
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{MealPlanner, MealType};
    use crate::recipe::Recipe;
    use crate::shopping::ShoppingList;
    use crate::store::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn catalog() -> RecipeCatalog {
        RecipeCatalog::new(vec![
            Recipe::new("pad-thai", "Pad Thai", 4).with_ingredients(vec![
                "8 oz rice noodles".to_string(),
                "2 tbsp vegetable oil".to_string(),
            ]),
            Recipe::new("chili", "Classic Beef Chili", 6)
                .with_ingredients(vec!["2 tablespoons olive oil".to_string()]),
        ])
    }

    fn planner_with(dates: &[(&str, &str)]) -> MealPlanner<MemoryStore> {
        let catalog = catalog();
        let mut planner = MealPlanner::load(MemoryStore::new());
        for (d, recipe_id) in dates {
            planner
                .add_meal(date(d), MealType::Dinner, catalog.get(recipe_id).unwrap())
                .unwrap();
        }
        planner
    }

    #[test]
    fn test_doubled_serving_size_doubles_quantities() {
        let mut planner = planner_with(&[("2025-06-02", "pad-thai")]);
        planner.update_serving_size(date("2025-06-02"), 8).unwrap();

        let candidates = calculate_candidates(
            planner.plans(),
            &catalog(),
            &[],
            date("2025-06-01"),
            None,
        );

        assert_eq!(candidates.len(), 2);
        let noodles = &candidates[0].scaled;
        assert_eq!(noodles.name, "rice noodles");
        assert_eq!(noodles.quantity, 16.0);
        assert_eq!(noodles.unit, "oz");
        let oil = &candidates[1].scaled;
        assert_eq!(oil.name, "vegetable oil");
        assert_eq!(oil.quantity, 4.0);
        assert_eq!(oil.unit, "tbsp");
    }

    #[test]
    fn test_past_dates_are_excluded() {
        let planner = planner_with(&[
            ("2025-06-01", "pad-thai"), // yesterday
            ("2025-06-02", "pad-thai"), // today
            ("2025-06-03", "chili"),    // tomorrow
        ]);

        let candidates = calculate_candidates(
            planner.plans(),
            &catalog(),
            &[],
            date("2025-06-02"),
            None,
        );

        let recipes: Vec<&str> = candidates
            .iter()
            .map(|candidate| candidate.scaled.recipe_id.as_str())
            .collect();
        assert!(recipes.contains(&"chili"));
        // Two pad thai lines from today only, one chili line from tomorrow.
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn test_explicit_date_restriction() {
        let planner = planner_with(&[
            ("2025-06-02", "pad-thai"),
            ("2025-06-03", "chili"),
        ]);

        let candidates = calculate_candidates(
            planner.plans(),
            &catalog(),
            &[],
            date("2025-06-02"),
            Some(date("2025-06-03")),
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].scaled.recipe_id, "chili");
    }

    #[test]
    fn test_entries_are_not_summed_across_recipes() {
        let c = RecipeCatalog::new(vec![
            Recipe::new("a", "A", 4).with_ingredients(vec!["2 tbsp olive oil".to_string()]),
            Recipe::new("b", "B", 4).with_ingredients(vec!["1 tbsp olive oil".to_string()]),
        ]);
        let mut planner = MealPlanner::load(MemoryStore::new());
        planner
            .add_meal(date("2025-06-02"), MealType::Lunch, c.get("a").unwrap())
            .unwrap();
        planner
            .add_meal(date("2025-06-02"), MealType::Dinner, c.get("b").unwrap())
            .unwrap();

        let candidates =
            calculate_candidates(planner.plans(), &c, &[], date("2025-06-01"), None);

        // Both olive oil entries survive as distinct candidates.
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|cand| cand.scaled.name == "olive oil"));
    }

    #[test]
    fn test_duplicates_are_annotated_not_dropped() {
        let planner = planner_with(&[("2025-06-02", "pad-thai")]);

        let mut list = ShoppingList::load(MemoryStore::new());
        let first = calculate_candidates(
            planner.plans(),
            &catalog(),
            list.items(),
            date("2025-06-01"),
            None,
        );
        let scaled: Vec<ScaledIngredient> =
            first.iter().map(|candidate| candidate.scaled.clone()).collect();
        list.add_candidates(&scaled, "From recipes").unwrap();

        let second = calculate_candidates(
            planner.plans(),
            &catalog(),
            list.items(),
            date("2025-06-01"),
            None,
        );

        assert_eq!(second.len(), first.len());
        assert!(second.iter().all(|candidate| candidate.already_listed));
    }

    #[test]
    fn test_unresolvable_meals_are_skipped() {
        let planner = planner_with(&[("2025-06-02", "pad-thai")]);
        let empty_catalog = RecipeCatalog::new(Vec::new());

        let candidates = calculate_candidates(
            planner.plans(),
            &empty_catalog,
            &[],
            date("2025-06-01"),
            None,
        );
        assert!(candidates.is_empty());
    }
}
