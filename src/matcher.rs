use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::recipe::{AvailableIngredients, Ingredient, Recipe};

/// A recipe together with the ingredients still needed to cook it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion<'a> {
    pub recipe: &'a Recipe,
    pub missing: Vec<&'a Ingredient>,
}

impl Suggestion<'_> {
    pub fn is_ready(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn status(&self) -> String {
        if self.is_ready() {
            "Ready to cook".to_string()
        } else {
            format!("Missing {}", self.missing.len())
        }
    }
}

/// Ingredients of `recipe` absent from `available`, in recipe order.
pub fn missing<'a>(recipe: &'a Recipe, available: &AvailableIngredients) -> Vec<&'a Ingredient> {
    recipe.missing_ingredients(available)
}

/// Pairs every recipe with its missing ingredients and orders them by how many are
/// missing. The sort is stable, so recipes missing the same number of ingredients
/// keep their catalog order.
pub fn rank<'a>(recipes: &'a [Recipe], available: &AvailableIngredients) -> Vec<Suggestion<'a>> {
    let mut suggestions: Vec<Suggestion<'a>> = recipes
        .iter()
        .map(|recipe| Suggestion {
            recipe,
            missing: missing(recipe, available),
        })
        .collect();
    suggestions.sort_by_key(|suggestion| suggestion.missing.len());
    suggestions
}

/// What to buy for one recipe. Same result as [`missing`]; kept as its own entry point
/// because it runs per chosen recipe, after ranking.
pub fn shopping_list<'a>(recipe: &'a Recipe, available: &AvailableIngredients) -> Vec<&'a Ingredient> {
    missing(recipe, available)
}

/// Ranks recipes from one injected catalog.
#[derive(Debug, Clone)]
pub struct Ranker {
    catalog: Catalog,
}

impl Ranker {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rank(&self, available: &AvailableIngredients) -> Vec<Suggestion<'_>> {
        let suggestions = rank(self.catalog.recipes(), available);
        debug!(
            available = available.len(),
            ready = suggestions.iter().filter(|s| s.is_ready()).count(),
            total = suggestions.len(),
            "ranked recipes"
        );
        suggestions
    }
}

/// Shopping lists for a set of chosen recipes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingList<'a> {
    pub per_recipe: Vec<Suggestion<'a>>,
}

impl<'a> ShoppingList<'a> {
    pub fn build(recipes: &[&'a Recipe], available: &AvailableIngredients) -> Self {
        let per_recipe = recipes
            .iter()
            .map(|&recipe| Suggestion {
                recipe,
                missing: shopping_list(recipe, available),
            })
            .collect();
        Self { per_recipe }
    }

    /// Everything to buy across all recipes, each ingredient once, in first-seen order.
    pub fn combined(&self) -> Vec<&'a Ingredient> {
        let mut seen = std::collections::HashSet::new();
        self.per_recipe
            .iter()
            .flat_map(|entry| entry.missing.iter().copied())
            .filter(|ingredient| seen.insert(*ingredient))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.per_recipe.iter().all(|entry| entry.missing.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::Rng;

    fn names<'a>(suggestions: &[Suggestion<'a>]) -> Vec<&'a str> {
        suggestions.iter().map(|s| s.recipe.name.as_str()).collect()
    }

    fn tokens<'a>(ingredients: &[&'a Ingredient]) -> Vec<&'a str> {
        ingredients.iter().map(|i| i.as_str()).collect()
    }

    fn two_recipe_catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("Pasta", ["pasta", "tomato", "garlic", "olive oil", "salt"], ""),
            Recipe::new("Omelette", ["eggs", "butter", "cheese", "salt", "pepper"], ""),
        ]
    }

    #[test]
    fn test_rank_puts_makeable_recipe_first() {
        let catalog = two_recipe_catalog();
        let available = AvailableIngredients::new(["pasta", "tomato", "garlic", "olive oil", "salt"]);
        let ranked = rank(&catalog, &available);

        assert_eq!(names(&ranked), vec!["Pasta", "Omelette"]);
        assert!(ranked[0].missing.is_empty());
        assert_eq!(tokens(&ranked[1].missing), vec!["eggs", "butter", "cheese", "pepper"]);
    }

    #[test]
    fn test_rank_with_nothing_available_orders_by_ingredient_count() {
        let catalog = crate::catalog::builtin::load_recipes();
        let ranked = rank(&catalog, &AvailableIngredients::default());

        // 3 ingredients, then the two five-ingredient recipes in catalog order, then 6.
        assert_eq!(
            names(&ranked),
            vec!["Grilled Cheese Sandwich", "Pasta with Tomato Sauce", "Omelette", "Fresh Salad"]
        );
        for suggestion in &ranked {
            let full: Vec<&Ingredient> = suggestion.recipe.ingredients.iter().collect();
            assert_eq!(suggestion.missing, full);
        }
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let catalog = vec![
            Recipe::new("C", ["x", "y"], ""),
            Recipe::new("A", ["x", "z"], ""),
            Recipe::new("B", ["w"], ""),
            Recipe::new("D", ["y", "z"], ""),
        ];
        let available = AvailableIngredients::new(["x"]);
        let ranked = rank(&catalog, &available);
        assert_eq!(names(&ranked), vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn test_rank_keeps_every_recipe() {
        let catalog = two_recipe_catalog();
        let available = AvailableIngredients::new(["nothing useful"]);
        assert_eq!(rank(&catalog, &available).len(), catalog.len());
    }

    #[test]
    fn test_rank_random_properties() {
        let pool = [
            "pasta", "tomato", "garlic", "olive oil", "salt", "eggs", "butter", "cheese", "pepper",
            "lettuce", "cucumber", "lemon", "bread",
        ];
        let catalog = crate::catalog::builtin::load_recipes();
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let mut chosen: Vec<String> = Vec::new();
            for s in pool {
                if !rng.gen_bool(0.5) {
                    continue;
                }
                chosen.push(if rng.gen_bool(0.5) { s.to_uppercase() } else { s.to_string() });
            }
            chosen.shuffle(&mut rng);
            let available = AvailableIngredients::new(&chosen);
            let ranked = rank(&catalog, &available);

            assert_eq!(ranked.len(), catalog.len());
            // Sorted by missing count, ties in catalog order.
            for pair in ranked.windows(2) {
                let (a, b) = (&pair[0], &pair[1]);
                assert!(a.missing.len() <= b.missing.len());
                if a.missing.len() == b.missing.len() {
                    let pos = |r: &Recipe| catalog.iter().position(|c| c.name == r.name);
                    assert!(pos(a.recipe) < pos(b.recipe));
                }
            }
            for suggestion in &ranked {
                // Missing is an order-preserving subsequence of the recipe's ingredients.
                let mut remaining = suggestion.recipe.ingredients.iter();
                for needed in &suggestion.missing {
                    assert!(remaining.any(|i| i == *needed));
                    assert!(!available.contains(needed));
                }
                let all_present = suggestion.recipe.ingredients.iter().all(|i| available.contains(i));
                assert_eq!(suggestion.missing.is_empty(), all_present);
            }
        }
    }

    #[test]
    fn test_ranker_uses_injected_catalog() {
        let ranker = Ranker::new(Catalog::new(vec![Recipe::new("Tea", ["tea", "water"], "")]));
        let ranked = ranker.rank(&AvailableIngredients::new(["Water"]));
        assert_eq!(names(&ranked), vec!["Tea"]);
        assert_eq!(tokens(&ranked[0].missing), vec!["tea"]);
        assert_eq!(ranked[0].status(), "Missing 1");
    }

    #[test]
    fn test_shopping_list_matches_missing() {
        let catalog = two_recipe_catalog();
        let available = AvailableIngredients::new(["eggs", "SALT"]);
        assert_eq!(
            tokens(&shopping_list(&catalog[1], &available)),
            vec!["butter", "cheese", "pepper"]
        );
        assert!(shopping_list(&catalog[1], &AvailableIngredients::new(["eggs", "butter", "cheese", "salt", "pepper"])).is_empty());
    }

    #[test]
    fn test_combined_shopping_list_dedups_in_first_seen_order() {
        let catalog = two_recipe_catalog();
        let chosen: Vec<&Recipe> = catalog.iter().collect();
        let list = ShoppingList::build(&chosen, &AvailableIngredients::new(["pasta", "eggs"]));

        assert_eq!(list.per_recipe.len(), 2);
        assert_eq!(
            tokens(&list.combined()),
            vec!["tomato", "garlic", "olive oil", "salt", "butter", "cheese", "pepper"]
        );
        assert!(!list.is_empty());
    }
}
