//! # Meal Planner Demo
//!
//! Walks through the core flow: plan meals for a week, scale the planned
//! recipes to each day's serving size, and build a shopping list from the
//! scaled candidates.

use chrono::NaiveDate;
use mealplan::aggregate::calculate_candidates;
use mealplan::planner::{MealPlanner, MealType};
use mealplan::recipe::RecipeCatalog;
use mealplan::shopping::ShoppingList;
use mealplan::store::MemoryStore;

fn main() -> anyhow::Result<()> {
    println!("🍜 Meal Planner Demo");
    println!("====================\n");

    let catalog = RecipeCatalog::builtin();
    let mut planner = MealPlanner::load(MemoryStore::new());
    let mut shopping = ShoppingList::load(MemoryStore::new());

    let monday: NaiveDate = "2025-06-02".parse()?;
    let tuesday: NaiveDate = "2025-06-03".parse()?;

    // Plan a few meals; the second pad thai on Monday is a no-op.
    let pad_thai = catalog.get("pad-thai").unwrap();
    let fried_rice = catalog.get("shrimp-fried-rice").unwrap();

    println!("{}", planner.add_meal(monday, MealType::Dinner, pad_thai)?);
    println!("{}", planner.add_meal(monday, MealType::Dinner, pad_thai)?);
    println!("{}", planner.add_meal(tuesday, MealType::Lunch, fried_rice)?);

    // Cook for eight on Monday.
    planner.update_serving_size(monday, 8)?;

    println!("\nScaled ingredients for the week:");
    let candidates = calculate_candidates(planner.plans(), &catalog, shopping.items(), monday, None);
    for candidate in &candidates {
        println!("  {} (from {})", candidate.scaled, candidate.scaled.recipe_name);
    }

    let scaled: Vec<_> = candidates.iter().map(|c| c.scaled.clone()).collect();
    let summary = shopping.add_candidates(&scaled, "From recipes")?;
    println!("\n{summary}");

    shopping.add_manual("Paper towels", "1 pack", "Household")?;

    println!("\nShopping list:\n{}", shopping.export_text());
    Ok(())
}
