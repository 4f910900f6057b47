pub mod catalog;
pub mod cli;
pub mod config;
pub mod matcher;
pub mod normalize;
pub mod ocr;
pub mod planner;
pub mod recipe;
pub mod selector;
pub mod session;
pub mod web;

pub use catalog::Catalog;
pub use matcher::{rank, shopping_list, Ranker, Suggestion};
pub use planner::{create_meal_plan, MealPlan, Weekday};
pub use recipe::{AvailableIngredients, Ingredient, Recipe};
pub use selector::{select, Selection, SelectionWarning};
