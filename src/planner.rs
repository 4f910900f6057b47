use serde::ser::{Serialize, SerializeMap, Serializer};
use std::error::Error;
use std::fmt;

use crate::recipe::Recipe;

pub const DEFAULT_PLAN_DAYS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    NoRecipes,
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::NoRecipes => write!(f, "Cannot build a meal plan without any recipes"),
        }
    }
}

impl Error for PlanError {}

/// One recipe per day, Monday first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealPlan<'a> {
    days: Vec<(Weekday, &'a Recipe)>,
}

impl<'a> MealPlan<'a> {
    pub fn get(&self, day: Weekday) -> Option<&'a Recipe> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, recipe)| *recipe)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &'a Recipe)> + '_ {
        self.days.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

// Serialized as a JSON object keyed by day name, Monday first.
impl Serialize for MealPlan<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, recipe) in &self.days {
            map.serialize_entry(day.name(), &recipe.name)?;
        }
        map.end()
    }
}

/// Cycles `recipes` over the first `days` weekdays (at most seven), wrapping around
/// when there are fewer recipes than days.
///
/// `recipes` must not be empty; callers are expected to check their selection first,
/// and an empty list is reported as [`PlanError::NoRecipes`].
pub fn create_meal_plan<'a>(recipes: &[&'a Recipe], days: usize) -> Result<MealPlan<'a>, PlanError> {
    if recipes.is_empty() {
        return Err(PlanError::NoRecipes);
    }

    let days = Weekday::ALL
        .iter()
        .take(days)
        .enumerate()
        .map(|(i, &day)| (day, recipes[i % recipes.len()]))
        .collect();
    Ok(MealPlan { days })
}
