use csv::ReaderBuilder;
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use super::{name_key, Catalog};
use crate::recipe::{Ingredient, Recipe};

// Expected CSV column headers
const NAME_COL: &str = "Name";
const INGREDIENTS_COL: &str = "Ingredients";
const INSTRUCTIONS_COL: &str = "Instructions";

// Ingredients inside one CSV cell are separated by semicolons so the cell survives
// the comma-delimited file format.
const CSV_INGREDIENT_SEPARATOR: char = ';';

#[derive(Debug)]
pub enum CatalogError {
    NotFound(PathBuf),
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    UnsupportedFormat(PathBuf),
    Empty(PathBuf),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound(path) => write!(f, "Recipe catalog not found at: {:?}", path),
            CatalogError::Io { path, source } => {
                write!(f, "Failed to read recipe catalog {:?}: {}", path, source)
            }
            CatalogError::Json(err) => write!(f, "Invalid JSON recipe catalog: {}", err),
            CatalogError::Csv(err) => write!(f, "Invalid CSV recipe catalog: {}", err),
            CatalogError::MissingColumn(column) => write!(f, "Column '{}' not found", column),
            CatalogError::UnsupportedFormat(path) => write!(
                f,
                "Unsupported recipe catalog format for {:?} (expected .json or .csv)",
                path
            ),
            CatalogError::Empty(path) => write!(f, "No valid recipes loaded from {:?}", path),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CatalogError::Io { source, .. } => Some(source),
            CatalogError::Json(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        CatalogError::Csv(err)
    }
}

/// Loads a catalog from a `.json` or `.csv` file, picked by extension.
pub async fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let parse: fn(&[u8]) -> Result<Vec<Recipe>, CatalogError> = match extension.as_deref() {
        Some("json") => parse_json_recipes,
        Some("csv") => parse_csv_recipes,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };

    let contents = fs::read(path).await.map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let recipes = clean_recipes(parse(&contents)?);
    if recipes.is_empty() {
        return Err(CatalogError::Empty(path.to_path_buf()));
    }
    debug!(path = ?path, count = recipes.len(), "recipe catalog loaded");
    Ok(Catalog::new(recipes))
}

fn parse_json_recipes(contents: &[u8]) -> Result<Vec<Recipe>, CatalogError> {
    let recipes: Vec<Recipe> = serde_json::from_slice(contents)?;
    Ok(recipes)
}

fn parse_csv_recipes(contents: &[u8]) -> Result<Vec<Recipe>, CatalogError> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(contents);

    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(CatalogError::MissingColumn(name))
    };
    let name_idx = column(NAME_COL)?;
    let ingredients_idx = column(INGREDIENTS_COL)?;
    // Instructions are optional in CSV catalogs.
    let instructions_idx = column(INSTRUCTIONS_COL).ok();

    let mut recipes = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let name = record.get(name_idx).unwrap_or_default().trim().to_string();
        let ingredients = record
            .get(ingredients_idx)
            .unwrap_or_default()
            .split(CSV_INGREDIENT_SEPARATOR)
            .map(Ingredient::new)
            .collect();
        let instructions = instructions_idx
            .and_then(|idx| record.get(idx))
            .unwrap_or_default()
            .trim()
            .to_string();

        recipes.push(Recipe {
            name,
            ingredients,
            instructions,
        });
    }
    Ok(recipes)
}

// Drops rows that could never be suggested: empty names, no ingredients, or a name
// already used by an earlier recipe (compared the way `Catalog::find` compares them).
// File order is otherwise kept.
fn clean_recipes(recipes: Vec<Recipe>) -> Vec<Recipe> {
    let mut seen_names: HashSet<String> = HashSet::new();
    let mut cleaned = Vec::with_capacity(recipes.len());

    for (row_index, mut recipe) in recipes.into_iter().enumerate() {
        recipe.name = recipe.name.trim().to_string();
        recipe.ingredients.retain(|ingredient| !ingredient.is_empty());

        if recipe.name.is_empty() {
            warn!(row = row_index, "skipping recipe with empty name");
            continue;
        }
        if recipe.ingredients.is_empty() {
            warn!(row = row_index, recipe = %recipe.name, "skipping recipe without ingredients");
            continue;
        }
        if !seen_names.insert(name_key(&recipe.name)) {
            warn!(row = row_index, recipe = %recipe.name, "skipping duplicate recipe name");
            continue;
        }
        cleaned.push(recipe);
    }
    cleaned
}
