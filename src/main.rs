use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use std::env;

use mealplan::aggregate::calculate_candidates;
use mealplan::planner::{MealPlanner, MealType};
use mealplan::recipe::RecipeCatalog;
use mealplan::shopping::{ShoppingList, GROCERY_ORDER_URL};
use mealplan::store::JsonFileStore;

#[derive(Parser, Debug)]
#[command(name = "mealplan", version, about = "Recipe browsing, meal planning, and shopping lists")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List recipes, optionally filtered by search query and category
    Recipes {
        /// Case-insensitive search over title and description
        #[arg(short, long)]
        query: Option<String>,
        /// Only recipes in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one recipe with its ingredients and instructions
    Show { id: String },
    /// Pick a random recipe
    Random,
    /// Manage the meal plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Compute scaled shopping candidates from planned meals
    Calculate {
        /// Restrict to one date (YYYY-MM-DD) instead of today-or-later
        #[arg(long)]
        date: Option<String>,
        /// Add the non-duplicate candidates to the shopping list
        #[arg(long)]
        add: bool,
    },
    /// Manage the shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingAction,
    },
}

#[derive(Subcommand, Debug)]
enum PlanAction {
    /// Assign a recipe to a date and meal slot
    Add {
        /// Date, YYYY-MM-DD
        date: String,
        /// breakfast, lunch, or dinner
        meal: String,
        /// Recipe id (see `mealplan recipes`)
        recipe: String,
    },
    /// Remove a meal by its id
    Remove { date: String, meal_id: String },
    /// Set the serving size for a date
    Serving { date: String, size: u32 },
    /// Show all planned meals
    List,
    /// Clear the entire meal plan
    Clear,
}

#[derive(Subcommand, Debug)]
enum ShoppingAction {
    /// Show the shopping list grouped by category
    List,
    /// Add an item by hand
    Add {
        name: String,
        #[arg(default_value = "")]
        quantity: String,
        #[arg(default_value = "")]
        category: String,
    },
    /// Toggle an item's checked state
    Check { id: String },
    /// Delete an item
    Remove { id: String },
    /// Remove all checked items
    ClearChecked,
    /// Print the list as plain text
    Export,
    /// Print the grocery-ordering hand-off URL
    Order,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{s}', expected YYYY-MM-DD"))
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let data_dir = env::var("MEALPLAN_DATA_DIR").unwrap_or_else(|_| "mealplan-data".to_string());
    info!("Using data directory: {}", data_dir);

    let store = JsonFileStore::new(&data_dir)?;
    let catalog = RecipeCatalog::builtin();

    match cli.command {
        Command::Recipes { query, category } => {
            let mut recipes = catalog.search(query.as_deref().unwrap_or(""));
            if let Some(category) = category {
                recipes.retain(|recipe| recipe.category.eq_ignore_ascii_case(&category));
            }

            if recipes.is_empty() {
                println!("No recipes found.");
            }
            for recipe in recipes {
                println!(
                    "{:<20} {} [{}] — serves {}, {} min",
                    recipe.id, recipe.title, recipe.category, recipe.servings, recipe.prep_time
                );
            }
        }

        Command::Show { id } => {
            let Some(recipe) = catalog.get(&id) else {
                bail!("Recipe '{}' not found", id);
            };
            println!("{} — {}", recipe.title, recipe.description);
            println!("Serves {}, {} minutes\n", recipe.servings, recipe.prep_time);
            println!("Ingredients:");
            for line in &recipe.ingredients {
                println!("  {line}");
            }
            if !recipe.instructions.is_empty() {
                println!("\nInstructions:");
                for (step, instruction) in recipe.instructions.iter().enumerate() {
                    println!("  {}. {}", step + 1, instruction);
                }
            }
        }

        Command::Random => match catalog.random() {
            Some(recipe) => println!("{} — {}", recipe.id, recipe.title),
            None => println!("The catalog is empty."),
        },

        Command::Plan { action } => {
            let mut planner = MealPlanner::load(store);
            match action {
                PlanAction::Add { date, meal, recipe } => {
                    let date = parse_date(&date)?;
                    let meal: MealType = meal.parse().map_err(anyhow::Error::msg)?;
                    let Some(recipe) = catalog.get(&recipe) else {
                        bail!("Recipe '{}' not found", recipe);
                    };
                    let outcome = planner.add_meal(date, meal, recipe)?;
                    println!("{outcome}: {} on {} ({})", recipe.title, date, meal);
                }
                PlanAction::Remove { date, meal_id } => {
                    let date = parse_date(&date)?;
                    if planner.remove_meal(date, &meal_id)? {
                        println!("Meal removed from {date}");
                    } else {
                        println!("No such meal on {date}");
                    }
                }
                PlanAction::Serving { date, size } => {
                    let date = parse_date(&date)?;
                    if planner.update_serving_size(date, size)? {
                        println!("Serving size for {date} set to {size}");
                    } else {
                        println!("Nothing planned on {date}");
                    }
                }
                PlanAction::List => {
                    if planner.is_empty() {
                        println!("Nothing planned yet.");
                    }
                    for plan in planner.plans() {
                        println!("{} (serves {}):", plan.date, plan.serving_size);
                        for meal in &plan.meals {
                            println!("  [{}] {:<10} {}", meal.id, meal.meal_type, meal.name);
                        }
                    }
                }
                PlanAction::Clear => {
                    let cleared = planner.clear_all()?;
                    println!("Cleared {cleared} planned date(s)");
                }
            }
        }

        Command::Calculate { date, add } => {
            let planner = MealPlanner::load(store.clone());
            let mut shopping = ShoppingList::load(store);
            let restrict_to = date.as_deref().map(parse_date).transpose()?;
            let today = Local::now().date_naive();

            let candidates = calculate_candidates(
                planner.plans(),
                &catalog,
                shopping.items(),
                today,
                restrict_to,
            );

            if candidates.is_empty() {
                println!("No upcoming meals to calculate.");
                return Ok(());
            }

            for candidate in &candidates {
                let marker = if candidate.already_listed {
                    " (already on list)"
                } else {
                    ""
                };
                println!(
                    "{:<30} from {}{}",
                    candidate.scaled.to_string(),
                    candidate.scaled.recipe_name,
                    marker
                );
            }

            if add {
                let fresh: Vec<_> = candidates
                    .iter()
                    .filter(|candidate| !candidate.already_listed)
                    .map(|candidate| candidate.scaled.clone())
                    .collect();
                let summary = shopping.add_candidates(&fresh, "From recipes")?;
                println!("\n{summary}");
            }
        }

        Command::Shopping { action } => {
            let mut shopping = ShoppingList::load(store);
            match action {
                ShoppingAction::List => {
                    if shopping.is_empty() {
                        println!("Your shopping list is empty. Add some items!");
                    }
                    for (category, items) in shopping.grouped() {
                        println!("{category}:");
                        for item in items {
                            let mark = if item.checked { 'x' } else { ' ' };
                            println!("  [{}] #{} {} — {}", mark, item.id, item.name, item.quantity);
                        }
                    }
                }
                ShoppingAction::Add {
                    name,
                    quantity,
                    category,
                } => {
                    let outcome = shopping.add_manual(&name, &quantity, &category)?;
                    println!("{outcome}");
                }
                ShoppingAction::Check { id } => {
                    if shopping.toggle(&id)? {
                        println!("Toggled item {id}");
                    } else {
                        println!("No item with id {id}");
                    }
                }
                ShoppingAction::Remove { id } => match shopping.remove(&id)? {
                    Some(item) => {
                        println!("{} has been removed from your shopping list", item.name)
                    }
                    None => println!("No item with id {id}"),
                },
                ShoppingAction::ClearChecked => {
                    let outcome = shopping.clear_checked()?;
                    println!("{outcome}");
                }
                ShoppingAction::Export => print!("{}", shopping.export_text()),
                ShoppingAction::Order => {
                    println!("Order your list at: {GROCERY_ORDER_URL}");
                }
            }
        }
    }

    Ok(())
}
