pub mod builtin;
pub mod data_loader;

use std::ops::Deref;
use std::sync::Arc;

use crate::recipe::Recipe;

pub use data_loader::{load_catalog, CatalogError};

/// Recipe names are unique and looked up ignoring surrounding whitespace and case.
pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Read-only recipe collection. Cloning is cheap; every clone shares the same recipes,
/// so one catalog can back any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct Catalog {
    recipes: Arc<[Recipe]>,
}

impl Catalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes: recipes.into() }
    }

    pub fn builtin() -> Self {
        Self::new(builtin::load_recipes())
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn find(&self, name: &str) -> Option<&Recipe> {
        let key = name_key(name);
        self.recipes.iter().find(|recipe| name_key(&recipe.name) == key)
    }
}

impl Deref for Catalog {
    type Target = [Recipe];

    fn deref(&self) -> &[Recipe] {
        &self.recipes
    }
}

impl From<Vec<Recipe>> for Catalog {
    fn from(recipes: Vec<Recipe>) -> Self {
        Self::new(recipes)
    }
}
