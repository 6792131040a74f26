#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mealplan::aggregate::calculate_candidates;
    use mealplan::parser::{parse_line, parse_lines};
    use mealplan::planner::{MealPlanner, MealType};
    use mealplan::recipe::{Recipe, RecipeCatalog};
    use mealplan::scale::{scale_recipe, serving_ratio};
    use mealplan::shopping::ShoppingList;
    use mealplan::store::MemoryStore;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn pad_thai() -> Recipe {
        Recipe::new("1", "Pad Thai", 4).with_ingredients(vec![
            "8 oz rice noodles".to_string(),
            "2 tbsp vegetable oil".to_string(),
        ])
    }

    #[test]
    fn test_parse_then_rescale_at_unity_is_identity() {
        let lines = [
            "8 oz rice noodles",
            "2 tbsp vegetable oil",
            "3 tablespoons fish sauce",
            "1.5 cups bean sprouts",
        ];

        for line in lines {
            let ingredient = parse_line(line).into_ingredient();
            let original = ingredient.quantity;
            assert_eq!(ingredient.scaled(1.0).quantity, original, "line: {line}");
        }
    }

    #[test]
    fn test_scaling_round_trip_restores_quantities() {
        let recipe = pad_thai();

        for target in [1u32, 2, 3, 5, 8, 12] {
            let ratio = serving_ratio(target, recipe.servings);
            let inverse = serving_ratio(recipe.servings, target);

            let scaled = scale_recipe(&recipe, target);
            let originals: Vec<f64> = recipe
                .ingredients
                .iter()
                .map(|line| parse_line(line).into_ingredient().quantity)
                .collect();

            for (entry, original) in scaled.iter().zip(&originals) {
                assert!((entry.quantity - original * ratio).abs() < 1e-9);
                assert!((entry.quantity * inverse - original).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_eight_servings_double_a_four_serving_recipe() {
        let scaled = scale_recipe(&pad_thai(), 8);

        assert_eq!(scaled[0].name, "rice noodles");
        assert_eq!(scaled[0].quantity, 16.0);
        assert_eq!(scaled[0].unit, "oz");
        assert_eq!(scaled[1].name, "vegetable oil");
        assert_eq!(scaled[1].quantity, 4.0);
        assert_eq!(scaled[1].unit, "tbsp");
    }

    #[test]
    fn test_calculation_window_is_today_or_later() {
        let catalog = RecipeCatalog::new(vec![pad_thai()]);
        let mut planner = MealPlanner::load(MemoryStore::new());
        let recipe = catalog.get("1").unwrap();

        planner
            .add_meal(date("2025-06-01"), MealType::Dinner, recipe)
            .unwrap();
        planner
            .add_meal(date("2025-06-02"), MealType::Dinner, recipe)
            .unwrap();
        planner
            .add_meal(date("2025-06-03"), MealType::Dinner, recipe)
            .unwrap();

        let candidates =
            calculate_candidates(planner.plans(), &catalog, &[], date("2025-06-02"), None);

        // Yesterday's meal contributes nothing; today's and tomorrow's do.
        assert_eq!(candidates.len(), 4);
    }

    #[test]
    fn test_candidates_flow_into_the_shopping_list_once() {
        let catalog = RecipeCatalog::new(vec![pad_thai()]);
        let mut planner = MealPlanner::load(MemoryStore::new());
        planner
            .add_meal(date("2025-06-02"), MealType::Dinner, catalog.get("1").unwrap())
            .unwrap();

        let mut shopping = ShoppingList::load(MemoryStore::new());

        let first = calculate_candidates(
            planner.plans(),
            &catalog,
            shopping.items(),
            date("2025-06-02"),
            None,
        );
        assert!(first.iter().all(|candidate| !candidate.already_listed));

        let scaled: Vec<_> = first.iter().map(|c| c.scaled.clone()).collect();
        let summary = shopping.add_candidates(&scaled, "From recipes").unwrap();
        assert_eq!(summary.added, 2);

        // Recalculating annotates every candidate instead of dropping it.
        let second = calculate_candidates(
            planner.plans(),
            &catalog,
            shopping.items(),
            date("2025-06-02"),
            None,
        );
        assert_eq!(second.len(), first.len());
        assert!(second.iter().all(|candidate| candidate.already_listed));

        // Adding again creates nothing new.
        let scaled_again: Vec<_> = second.iter().map(|c| c.scaled.clone()).collect();
        let summary = shopping.add_candidates(&scaled_again, "From recipes").unwrap();
        assert_eq!(summary.added, 0);
        assert_eq!(summary.duplicates, 2);
        assert_eq!(shopping.items().len(), 2);
    }

    #[test]
    fn test_shopping_items_keep_the_quantity_from_calculation_time() {
        let catalog = RecipeCatalog::new(vec![pad_thai()]);
        let mut planner = MealPlanner::load(MemoryStore::new());
        planner
            .add_meal(date("2025-06-02"), MealType::Dinner, catalog.get("1").unwrap())
            .unwrap();
        planner.update_serving_size(date("2025-06-02"), 8).unwrap();

        let mut shopping = ShoppingList::load(MemoryStore::new());
        let candidates = calculate_candidates(
            planner.plans(),
            &catalog,
            shopping.items(),
            date("2025-06-02"),
            None,
        );
        let scaled: Vec<_> = candidates.iter().map(|c| c.scaled.clone()).collect();
        shopping.add_candidates(&scaled, "From recipes").unwrap();
        assert_eq!(shopping.items()[0].quantity, "16 oz");

        // A later serving-size change never rescales stored items.
        planner.update_serving_size(date("2025-06-02"), 2).unwrap();
        assert_eq!(shopping.items()[0].quantity, "16 oz");
    }

    #[test]
    fn test_headers_skipped_and_unparsed_lines_carried() {
        let recipe = Recipe::new("2", "Chicken Teriyaki", 4).with_ingredients(vec![
            "For the sauce:".to_string(),
            "1/4 cup low-sodium soy sauce".to_string(),
            "Steamed white or brown rice, for serving".to_string(),
        ]);

        let scaled = scale_recipe(&recipe, 8);
        assert_eq!(scaled.len(), 2);

        // "1/4" keeps its leading numeric token.
        assert_eq!(scaled[0].name, "low-sodium soy sauce");
        assert_eq!(scaled[0].quantity, 2.0);

        // The unparseable line rides along at quantity 1 * ratio.
        assert_eq!(scaled[1].name, "Steamed white or brown rice, for serving");
        assert_eq!(scaled[1].quantity, 2.0);
    }

    #[test]
    fn test_parse_lines_over_a_real_ingredient_block() {
        let block = [
            "8 oz pad Thai rice noodles (stir-fry rice noodles)",
            "2 tablespoons vegetable or peanut oil",
            "",
            "For the sauce:",
            "3 tablespoons fish sauce",
            "1 tablespoon soy sauce",
        ];

        let parsed = parse_lines(block);
        assert_eq!(parsed.len(), 4);
        assert!(parsed.iter().all(|line| line.is_parsed()));
    }
}
