use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::num::IntErrorKind;

use crate::matcher::Suggestion;
use crate::recipe::Recipe;

/// Why a token of the selection input was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionWarning {
    /// The token is a number but does not point at a listed suggestion.
    OutOfRange(String),
    /// The token is not a number at all.
    NotANumber(String),
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionWarning::OutOfRange(token) => {
                write!(f, "Ignoring invalid recipe number: {}", token)
            }
            SelectionWarning::NotANumber(token) => write!(f, "Ignoring invalid input: {}", token),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection<'a> {
    pub recipes: Vec<&'a Recipe>,
    pub warnings: Vec<SelectionWarning>,
}

impl Selection<'_> {
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

// Integer literals may group digits with single underscores ("1_000"). Returns the
// token without them, or None when the underscores are misplaced.
fn strip_digit_separators(token: &str) -> Option<Cow<'_, str>> {
    if !token.contains('_') {
        return Some(Cow::Borrowed(token));
    }
    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    let well_formed = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    well_formed.then(|| Cow::Owned(token.replace('_', "")))
}

/// Maps a comma-separated list of 1-based indices onto the suggested recipes.
///
/// Bad tokens produce warnings and are skipped. A recipe picked more than once is kept
/// at the position of its first pick.
pub fn select<'a>(suggestions: &[Suggestion<'a>], raw_input: &str) -> Selection<'a> {
    let mut selection = Selection::default();
    let mut seen: HashSet<&'a str> = HashSet::new();

    for token in raw_input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let Some(number) = strip_digit_separators(token) else {
            selection.warnings.push(SelectionWarning::NotANumber(token.to_string()));
            continue;
        };
        let index = match number.parse::<i64>() {
            Ok(index) => index,
            // Too large for i64 is still a number, just not a listed one.
            Err(err) if matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                selection.warnings.push(SelectionWarning::OutOfRange(token.to_string()));
                continue;
            }
            Err(_) => {
                selection.warnings.push(SelectionWarning::NotANumber(token.to_string()));
                continue;
            }
        };

        let recipe = match usize::try_from(index)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| suggestions.get(i))
        {
            Some(suggestion) => suggestion.recipe,
            None => {
                selection.warnings.push(SelectionWarning::OutOfRange(index.to_string()));
                continue;
            }
        };

        if seen.insert(recipe.name.as_str()) {
            selection.recipes.push(recipe);
        }
    }

    selection
}
