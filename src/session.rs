use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::matcher::{Ranker, ShoppingList, Suggestion};
use crate::normalize::parse_ingredient_list;
use crate::planner::{create_meal_plan, DEFAULT_PLAN_DAYS};
use crate::recipe::{AvailableIngredients, Ingredient, Recipe};
use crate::selector::select;

const BANNER: &str = "\
========================================
Welcome to RecipeApp!

This tool helps you decide what to cook based on the ingredients you
have on hand, and generates shopping lists and meal plans.
========================================
";

/// Prints `message`, then reads one line. `None` means the input is closed.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message)?;
    output.flush()?;
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}

pub fn print_suggestions<W: Write>(output: &mut W, suggestions: &[Suggestion<'_>]) -> Result<()> {
    writeln!(output, "\nRecipe Suggestions:")?;
    for (idx, suggestion) in suggestions.iter().enumerate() {
        writeln!(output, " {}. {} – {}", idx + 1, suggestion.recipe.name, suggestion.status())?;
    }
    writeln!(output)?;
    Ok(())
}

fn print_shopping_lists<W: Write>(output: &mut W, chosen: &[&Recipe], available: &AvailableIngredients) -> Result<()> {
    let list = ShoppingList::build(chosen, available);
    for entry in &list.per_recipe {
        writeln!(output, "\nShopping list for {}:", entry.recipe.name)?;
        if entry.missing.is_empty() {
            writeln!(output, "You have everything you need!")?;
        } else {
            for ingredient in &entry.missing {
                writeln!(output, " - {}", ingredient)?;
            }
        }
    }

    let combined = list.combined();
    if list.per_recipe.len() > 1 && !combined.is_empty() {
        writeln!(output, "\nCombined shopping list:")?;
        for ingredient in combined {
            writeln!(output, " - {}", ingredient)?;
        }
    }
    Ok(())
}

/// Runs one full interactive round: ingredients, suggestions, selection, shopping lists
/// and an optional weekly plan.
///
/// When `preset` is given (from a flag or an OCR scan) the ingredient prompt is skipped.
pub fn run_session<R: BufRead, W: Write>(
    ranker: &Ranker,
    preset: Option<Vec<Ingredient>>,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "{}", BANNER)?;

    let ingredients = match preset {
        Some(ingredients) => {
            let listed: Vec<&str> = ingredients.iter().map(|i| i.as_str()).collect();
            writeln!(output, "Using ingredients: {}", listed.join(", "))?;
            ingredients
        }
        None => {
            let raw = prompt(input, output, "Enter the ingredients you have (comma separated): ")?
                .unwrap_or_default();
            parse_ingredient_list(&raw)
        }
    };
    let available: AvailableIngredients = ingredients.into_iter().collect();
    debug!(count = available.len(), "collected available ingredients");

    let suggestions = ranker.rank(&available);
    print_suggestions(output, &suggestions)?;

    let raw_selection = prompt(
        input,
        output,
        "Enter the numbers of the recipes you want to cook (comma separated), or press Enter to skip: ",
    )?
    .unwrap_or_default();
    let selection = select(&suggestions, &raw_selection);
    for warning in &selection.warnings {
        writeln!(output, "{}", warning)?;
    }

    if selection.is_empty() {
        writeln!(output, "No recipes selected.")?;
    } else {
        print_shopping_lists(output, &selection.recipes, &available)?;

        let answer = prompt(
            input,
            output,
            "\nWould you like to generate a weekly meal plan from these recipes? (y/n): ",
        )?
        .unwrap_or_else(|| "n".to_string());

        if answer.trim().to_lowercase().starts_with('y') {
            let plan = create_meal_plan(&selection.recipes, DEFAULT_PLAN_DAYS)?;
            writeln!(output, "\nYour meal plan for the week:")?;
            for (day, recipe) in plan.iter() {
                writeln!(output, " {}: {}", day, recipe.name)?;
            }
        } else {
            writeln!(output, "Meal plan skipped.")?;
        }
    }

    writeln!(output, "\nThank you for using RecipeApp!")?;
    Ok(())
}
