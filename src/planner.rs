//! # Meal Planner
//!
//! Meal plans are bucketed per calendar date: a bucket is created on the
//! first assignment for a date, carries a serving size, and is deleted
//! outright once its last meal is removed. The whole collection is persisted
//! after every mutation.

use crate::recipe::Recipe;
use crate::store::{load_collection, save_collection, Storage};
use anyhow::Result;
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key for the persisted meal-plan collection.
pub const MEAL_PLANS_KEY: &str = "mealPlans";

/// Serving size a new date bucket starts with.
pub const DEFAULT_SERVING_SIZE: u32 = 4;

fn default_serving_size() -> u32 {
    DEFAULT_SERVING_SIZE
}

/// Slot a meal is planned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub fn all() -> [MealType; 3] {
        [MealType::Breakfast, MealType::Lunch, MealType::Dinner]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(format!(
                "unknown meal type '{other}', expected breakfast, lunch, or dinner"
            )),
        }
    }
}

/// One meal assigned to a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanEntry {
    pub id: String,
    /// Recipe title snapshot at assignment time.
    pub name: String,
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub recipe_id: Option<String>,
}

/// All meals planned for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub date: NaiveDate,
    #[serde(default = "default_serving_size")]
    pub serving_size: u32,
    pub meals: Vec<MealPlanEntry>,
}

/// Result of [`MealPlanner::add_meal`]. A duplicate assignment is an
/// informational outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMealOutcome {
    Added,
    AlreadyPlanned,
}

impl fmt::Display for AddMealOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddMealOutcome::Added => write!(f, "Meal added"),
            AddMealOutcome::AlreadyPlanned => write!(f, "Already added to this day"),
        }
    }
}

/// Controller over the persisted meal-plan collection.
pub struct MealPlanner<S: Storage> {
    store: S,
    plans: Vec<MealPlan>,
}

impl<S: Storage> MealPlanner<S> {
    /// Load the planner from storage; missing or corrupt data starts empty.
    pub fn load(store: S) -> Self {
        let plans: Vec<MealPlan> = load_collection(&store, MEAL_PLANS_KEY);
        debug!("Loaded {} meal plan date(s)", plans.len());
        Self { store, plans }
    }

    pub fn plans(&self) -> &[MealPlan] {
        &self.plans
    }

    pub fn plan_for(&self, date: NaiveDate) -> Option<&MealPlan> {
        self.plans.iter().find(|plan| plan.date == date)
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Assign a recipe to a date and meal slot.
    ///
    /// Creates the date bucket (with the default serving size) when absent.
    /// Assigning the same `(meal type, recipe)` pair to the same date twice
    /// is an idempotent no-op reporting [`AddMealOutcome::AlreadyPlanned`].
    pub fn add_meal(
        &mut self,
        date: NaiveDate,
        meal_type: MealType,
        recipe: &Recipe,
    ) -> Result<AddMealOutcome> {
        if let Some(plan) = self.plans.iter().find(|plan| plan.date == date) {
            let already = plan.meals.iter().any(|meal| {
                meal.meal_type == meal_type && meal.recipe_id.as_deref() == Some(recipe.id.as_str())
            });
            if already {
                info!(
                    "{} already planned for {} {}",
                    recipe.title, meal_type, date
                );
                return Ok(AddMealOutcome::AlreadyPlanned);
            }
        }

        let entry = MealPlanEntry {
            id: format!("{date}-{meal_type}-{}", recipe.id),
            name: recipe.title.clone(),
            meal_type,
            recipe_id: Some(recipe.id.clone()),
        };

        match self.plans.iter_mut().find(|plan| plan.date == date) {
            Some(plan) => plan.meals.push(entry),
            None => {
                self.plans.push(MealPlan {
                    date,
                    serving_size: DEFAULT_SERVING_SIZE,
                    meals: vec![entry],
                });
                self.plans.sort_by_key(|plan| plan.date);
            }
        }

        info!("Added {} to {} on {}", recipe.title, meal_type, date);
        self.persist()?;
        Ok(AddMealOutcome::Added)
    }

    /// Remove one meal by id; a bucket emptied by the removal is deleted.
    /// Returns false when no such meal exists.
    pub fn remove_meal(&mut self, date: NaiveDate, meal_id: &str) -> Result<bool> {
        let Some(index) = self.plans.iter().position(|plan| plan.date == date) else {
            return Ok(false);
        };

        let plan = &mut self.plans[index];
        let before = plan.meals.len();
        plan.meals.retain(|meal| meal.id != meal_id);

        if plan.meals.len() == before {
            return Ok(false);
        }

        if plan.meals.is_empty() {
            self.plans.remove(index);
            debug!("Removed empty plan bucket for {}", date);
        }

        info!("Removed meal {} from {}", meal_id, date);
        self.persist()?;
        Ok(true)
    }

    /// Change a date's serving size. Silently ignored when the date has no
    /// bucket or the size is zero; returns whether anything changed.
    pub fn update_serving_size(&mut self, date: NaiveDate, serving_size: u32) -> Result<bool> {
        if serving_size == 0 {
            warn!("Ignoring serving size 0 for {}", date);
            return Ok(false);
        }

        let Some(plan) = self.plans.iter_mut().find(|plan| plan.date == date) else {
            debug!("No plan for {}, serving size unchanged", date);
            return Ok(false);
        };

        plan.serving_size = serving_size;
        info!("Serving size for {} set to {}", date, serving_size);
        self.persist()?;
        Ok(true)
    }

    /// Drop every bucket; returns how many dates were cleared.
    pub fn clear_all(&mut self) -> Result<usize> {
        let cleared = self.plans.len();
        self.plans.clear();
        info!("Cleared {} meal plan date(s)", cleared);
        self.persist()?;
        Ok(cleared)
    }

    fn persist(&self) -> Result<()> {
        save_collection(&self.store, MEAL_PLANS_KEY, &self.plans)
    }
}
