//! Turning free text into ingredient tokens.
//!
//! Two inputs reach the matcher: a comma-separated list typed by the user, and the raw
//! text an OCR engine read off a photographed shopping list or label.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::recipe::Ingredient;

/// Splits a typed, comma-separated list such as `"Pasta, tomato ,, salt"`.
pub fn parse_ingredient_list(raw: &str) -> Vec<Ingredient> {
    raw.split(',')
        .map(Ingredient::new)
        .filter(|ingredient| !ingredient.is_empty())
        .collect()
}

/// Maps a (mostly Spanish) word onto the ingredient name recipes use.
/// Unknown words come back unchanged.
pub fn canonical_name(token: &str) -> &str {
    match token {
        "harina" => "flour",
        "huevo" | "huevos" => "egg",
        "leche" => "milk",
        "azucar" => "sugar",
        "aceite" => "oil",
        "sal" => "salt",
        "queso" => "cheese",
        "tomate" | "tomates" => "tomato",
        "cebolla" => "onion",
        "ajo" => "garlic",
        "pimienta" => "pepper",
        "mantequilla" | "manteca" => "butter",
        "pollo" => "chicken",
        "carne" | "res" => "beef",
        "yogur" | "yogurt" => "yogurt",
        "fresa" | "fresas" => "strawberries",
        "platano" | "platanos" => "banana",
        other => other,
    }
}

fn strip_accents(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Normalizes OCR output into ingredient tokens: accents removed, lower-cased, split on
/// anything that is not an ASCII letter or digit, and mapped through [`canonical_name`].
///
/// Multi-word ingredients come out as separate words (`"olive oil"` gives `olive`, `oil`).
pub fn normalize_ocr_text(text: &str) -> Vec<Ingredient> {
    let lowered = strip_accents(text).to_lowercase();
    lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| Ingredient::new(canonical_name(token)))
        .collect()
}
