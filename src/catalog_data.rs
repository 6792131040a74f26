//! Built-in recipe dataset.

use crate::recipe::Recipe;

/// The recipes compiled into the crate.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new("pad-thai", "Pad Thai", 4)
            .with_description("Rice noodles tossed with egg, bean sprouts, and a sweet-savory tamarind sauce.")
            .with_category("Thai")
            .with_prep_time(15)
            .with_ingredients(vec![
                "8 oz pad Thai rice noodles (stir-fry rice noodles)".to_string(),
                "2 tablespoons vegetable or peanut oil".to_string(),
                "1-2 shallots, sliced".to_string(),
                "4 garlic cloves, chopped".to_string(),
                "2 eggs, whisked with a fork".to_string(),
                "1-2 cups bean sprouts".to_string(),
                "2-3 lime wedges (essential!)".to_string(),
                "For the sauce:".to_string(),
                "3 tablespoons fish sauce".to_string(),
                "3 tablespoons brown sugar or palm sugar".to_string(),
                "3 tablespoons rice vinegar".to_string(),
                "1 tablespoon soy sauce".to_string(),
                "1-3 teaspoons sriracha or chili garlic sauce (optional)".to_string(),
            ])
            .with_instructions(vec![
                "Cook the rice noodles according to the package directions, rinse in cool water, and drain well.".to_string(),
                "Mix the sauce ingredients together in a small bowl.".to_string(),
                "Heat oil in a wok over medium-high heat; stir-fry shallots and garlic for 1 minute.".to_string(),
                "Push everything aside, pour in the eggs, and let them set before breaking them apart.".to_string(),
                "Add the noodles and sauce; toss for 2-3 minutes until absorbed.".to_string(),
                "Add the bean sprouts, toss briefly, and serve with lime wedges.".to_string(),
            ]),
        Recipe::new("chicken-teriyaki", "Chicken Teriyaki", 4)
            .with_description("Skillet chicken glazed with a thickened soy, ginger, and brown sugar sauce.")
            .with_category("Japanese")
            .with_prep_time(30)
            .with_ingredients(vec![
                "1 tablespoon vegetable oil".to_string(),
                "1/4 cup low-sodium soy sauce".to_string(),
                "1/4 cup water".to_string(),
                "3 tablespoons packed light brown sugar".to_string(),
                "2 tablespoons rice vinegar".to_string(),
                "1/4 teaspoon sesame oil".to_string(),
                "2 cloves garlic, minced".to_string(),
                "1 tablespoon minced fresh ginger".to_string(),
                "1 tablespoon cornstarch".to_string(),
                "2 green onions, sliced (for garnish)".to_string(),
                "1 teaspoon sesame seeds (for garnish)".to_string(),
                "Steamed white or brown rice, for serving".to_string(),
            ])
            .with_instructions(vec![
                "Whisk together soy sauce, water, brown sugar, rice vinegar, sesame oil, garlic, and ginger.".to_string(),
                "Brown the chicken in oil over medium-high heat, about 3-4 minutes per side.".to_string(),
                "Pour the sauce over the chicken and bring to a simmer.".to_string(),
                "Stir in the cornstarch slurry and cook until the sauce thickens.".to_string(),
                "Garnish with green onions and sesame seeds; serve over rice.".to_string(),
            ]),
        Recipe::new("shrimp-fried-rice", "Shrimp Fried Rice", 4)
            .with_description("Quick and flavorful wok-fried rice with shrimp, eggs, and vegetables.")
            .with_category("Chinese")
            .with_prep_time(20)
            .with_ingredients(vec![
                "3 cups Jasmine rice (cooked and chilled)".to_string(),
                "2 tablespoons avocado oil (divided)".to_string(),
                "1 pound large shrimp (peeled and deveined)".to_string(),
                "3 cloves garlic, minced".to_string(),
                "2 carrots, diced".to_string(),
                "2 eggs, lightly beaten".to_string(),
                "3 tablespoons soy sauce".to_string(),
                "1 teaspoon sesame oil".to_string(),
            ])
            .with_instructions(vec![
                "Heat half the oil in a wok and cook the shrimp until pink; set aside.".to_string(),
                "Stir-fry the garlic and carrots in the remaining oil.".to_string(),
                "Push the vegetables aside and scramble the eggs in the center.".to_string(),
                "Add the rice, soy sauce, and sesame oil; toss until heated through.".to_string(),
                "Return the shrimp to the wok, toss, and serve.".to_string(),
            ]),
        Recipe::new("mango-sticky-rice", "Mango Sticky Rice", 4)
            .with_description("Sweet coconut sticky rice with ripe mango and a coconut glaze.")
            .with_category("Dessert")
            .with_prep_time(70)
            .with_ingredients(vec![
                "1 can of Coconut Milk".to_string(),
                "1 cup of Sweet or Glutinous Rice".to_string(),
                "1 large Ripe Mango".to_string(),
                "1/2 cup of Sugar".to_string(),
                "1 pinch of Salt".to_string(),
                "1 Tsp. Corn Starch".to_string(),
                "2 Tbsp. Water".to_string(),
                "Sesame Seeds (optional garnish)".to_string(),
            ])
            .with_instructions(vec![
                "Soak the sweet rice for at least an hour, then steam for 50-55 minutes.".to_string(),
                "Simmer coconut milk, sugar, and salt; stir in the rice until the liquid is absorbed.".to_string(),
                "Thicken the remaining coconut milk with the cornstarch slurry into a glaze.".to_string(),
                "Slice the mango, plate over the molded rice, and finish with glaze and sesame seeds.".to_string(),
            ]),
        Recipe::new("beef-chili", "Classic Beef Chili", 6)
            .with_description("A hearty, flavorful chili made with ground beef, beans, and a rich tomato base.")
            .with_category("Main Course")
            .with_prep_time(45)
            .with_ingredients(vec![
                "2 tablespoons olive oil".to_string(),
                "1 large onion, diced".to_string(),
                "2 garlic cloves, minced".to_string(),
                "1 red bell pepper, diced".to_string(),
                "1 pound ground beef".to_string(),
                "2 tablespoons chili powder".to_string(),
                "1 teaspoon cumin".to_string(),
                "1 teaspoon salt".to_string(),
                "1/2 teaspoon black pepper".to_string(),
            ])
            .with_instructions(vec![
                "Heat oil in a large pot; cook the onion until soft, about 5 minutes.".to_string(),
                "Add garlic and bell pepper and cook 2 minutes more.".to_string(),
                "Brown the ground beef, breaking it up as it cooks.".to_string(),
                "Stir in the seasonings, simmer on low for 20 minutes, and serve hot.".to_string(),
            ]),
        Recipe::new("veggie-stir-fry", "Vegetable Stir Fry", 4)
            .with_description("Colorful mix of crisp vegetables in a savory sauce, served over rice or noodles.")
            .with_category("Vegetarian")
            .with_prep_time(20)
            .with_ingredients(vec![
                "2 tablespoons peanut oil".to_string(),
                "2 cups broccoli florets".to_string(),
                "1 red bell pepper, sliced".to_string(),
                "2 carrots, cut into matchsticks".to_string(),
                "3 tablespoons soy sauce".to_string(),
                "1 tablespoon honey".to_string(),
                "2 cloves garlic, minced".to_string(),
            ])
            .with_instructions(vec![
                "Heat the oil in a wok over high heat.".to_string(),
                "Stir-fry the vegetables until crisp-tender, 4-5 minutes.".to_string(),
                "Add garlic, soy sauce, and honey; toss for another minute and serve.".to_string(),
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_well_formed() {
        let recipes = builtin_recipes();
        assert!(!recipes.is_empty());

        for recipe in &recipes {
            assert!(!recipe.id.is_empty());
            assert!(!recipe.title.is_empty());
            assert!(recipe.servings > 0);
            assert!(!recipe.ingredients.is_empty());
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let recipes = builtin_recipes();
        let mut ids: Vec<&str> = recipes.iter().map(|recipe| recipe.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), recipes.len());
    }
}
