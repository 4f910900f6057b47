use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single ingredient token, trimmed and lower-cased once when it is built.
///
/// Every comparison inside the matcher goes through this type, so the
/// case-insensitive rule lives in exactly one place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ingredient(String);

impl Ingredient {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Ingredient {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Ingredient {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<Ingredient> for String {
    fn from(ingredient: Ingredient) -> Self {
        ingredient.0
    }
}

impl AsRef<str> for Ingredient {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    pub fn new<I, S>(name: impl Into<String>, ingredients: I, instructions: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(|i| Ingredient::new(i.as_ref())).collect(),
            instructions: instructions.into(),
        }
    }

    /// Ingredients this recipe needs that are not in `available`, in recipe order.
    /// An empty result means the recipe can be cooked right away.
    pub fn missing_ingredients<'a>(&'a self, available: &AvailableIngredients) -> Vec<&'a Ingredient> {
        self.ingredients
            .iter()
            .filter(|ingredient| !available.contains(ingredient))
            .collect()
    }
}

/// The set of ingredients the user has on hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableIngredients {
    items: HashSet<Ingredient>,
}

impl AvailableIngredients {
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        raw.into_iter().map(|s| Ingredient::new(s.as_ref())).collect()
    }

    pub fn contains(&self, ingredient: &Ingredient) -> bool {
        self.items.contains(ingredient)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Ingredient> for AvailableIngredients {
    fn from_iter<T: IntoIterator<Item = Ingredient>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().filter(|i| !i.is_empty()).collect(),
        }
    }
}

impl<'a> FromIterator<&'a Ingredient> for AvailableIngredients {
    fn from_iter<T: IntoIterator<Item = &'a Ingredient>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}
