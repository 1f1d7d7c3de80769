// ABOUTME: Nutrition tracking models for daily food intake
// ABOUTME: NutritionFacts, DailyTotals, LogEntry, NutritionGoals, and MealType definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::constants::goals;

/// Macro-nutrient values of one catalog food
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl NutritionFacts {
    /// Create a set of nutrition facts
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

/// Session-scoped running sum of logged foods
///
/// Only ever grows through [`DailyTotals::add`]; a reload replaces it wholesale
/// via [`DailyTotals::reset`] followed by fresh additions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Calories consumed
    pub calories: f64,
    /// Protein consumed in grams
    pub protein: f64,
    /// Carbohydrates consumed in grams
    pub carbs: f64,
    /// Fat consumed in grams
    pub fat: f64,
}

impl DailyTotals {
    /// Add one food's facts to every field
    pub fn add(&mut self, facts: &NutritionFacts) {
        self.calories += facts.calories;
        self.protein += facts.protein;
        self.carbs += facts.carbs;
        self.fat += facts.fat;
    }

    /// Zero every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Unspecified or other meal type
    Other,
}

impl MealType {
    /// Meals that get a slot on the meal-plan panel, in display order
    pub const PLANNED: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" | "snacks" => Self::Snack,
            _ => Self::Other,
        }
    }

    /// Name of the meal-plan slot for this meal
    #[must_use]
    pub const fn slot_name(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snacks",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slot_name())
    }
}

fn lossy_meal_type<'de, D>(deserializer: D) -> Result<Option<MealType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(MealType::from_str_lossy))
}

/// One record of the backend-owned food log
///
/// Only `food_name` is required. The backend may return the full row it
/// stored, so the remaining fields are kept when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Backend row identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Name of the logged food, as sent by the client
    pub food_name: String,
    /// Calories recorded with the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Serving size recorded with the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<f64>,
    /// Protein recorded with the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Carbohydrates recorded with the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    /// Fat recorded with the entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    /// Meal the entry belongs to
    #[serde(
        default,
        deserialize_with = "lossy_meal_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub meal_type: Option<MealType>,
    /// Backend timestamp (`%Y-%m-%d %H:%M:%S`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl LogEntry {
    /// Minimal entry carrying only a food name
    pub fn named(food_name: impl Into<String>) -> Self {
        Self {
            id: None,
            food_name: food_name.into(),
            calories: None,
            serving_size: None,
            protein: None,
            carbs: None,
            fat: None,
            meal_type: None,
            date: None,
        }
    }
}

/// Body of an append request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLogEntry {
    /// Name of the food as shown to the user
    pub food_name: String,
    /// Calories of one serving
    pub calories: f64,
    /// Meal the entry belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
}

impl NewLogEntry {
    /// Create an append request for a food
    pub fn new(food_name: impl Into<String>, calories: f64) -> Self {
        Self {
            food_name: food_name.into(),
            calories,
            meal_type: None,
        }
    }

    /// Attach a meal type
    #[must_use]
    pub const fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }
}

/// Daily nutrition targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    /// Calorie target, the progress bar reference
    #[serde(default = "default_calories")]
    pub calories: f64,
    /// Protein target in grams
    #[serde(default = "default_protein")]
    pub protein: f64,
    /// Carbohydrate target in grams
    #[serde(default = "default_carbs")]
    pub carbs: f64,
    /// Fat target in grams
    #[serde(default = "default_fat")]
    pub fat: f64,
}

const fn default_calories() -> f64 {
    goals::DEFAULT_CALORIES
}

const fn default_protein() -> f64 {
    goals::DEFAULT_PROTEIN_G
}

const fn default_carbs() -> f64 {
    goals::DEFAULT_CARBS_G
}

const fn default_fat() -> f64 {
    goals::DEFAULT_FAT_G
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: goals::DEFAULT_CALORIES,
            protein: goals::DEFAULT_PROTEIN_G,
            carbs: goals::DEFAULT_CARBS_G,
            fat: goals::DEFAULT_FAT_G,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_add_and_reset() {
        let mut totals = DailyTotals::default();
        totals.add(&NutritionFacts::new(95.0, 0.5, 25.0, 0.3));
        totals.add(&NutritionFacts::new(105.0, 1.3, 27.0, 0.4));
        assert!((totals.calories - 200.0).abs() < f64::EPSILON);
        assert!((totals.protein - 1.8).abs() < 1e-9);
        assert!(!totals.is_empty());

        totals.reset();
        assert!(totals.is_empty());
    }

    #[test]
    fn test_log_entry_parses_minimal_and_full_rows() {
        let minimal: LogEntry = serde_json::from_str(r#"{"food_name":"banana"}"#).unwrap();
        assert_eq!(minimal, LogEntry::named("banana"));

        let full: LogEntry = serde_json::from_str(
            r#"{"id":7,"food_name":"Apple","serving_size":1.0,"calories":95.0,
                "protein":0.5,"carbs":25.0,"fat":0.3,"meal_type":"snacks",
                "date":"2025-03-01 08:15:00"}"#,
        )
        .unwrap();
        assert_eq!(full.id, Some(7));
        assert_eq!(full.meal_type, Some(MealType::Snack));
        assert_eq!(full.date.as_deref(), Some("2025-03-01 08:15:00"));
    }

    #[test]
    fn test_new_log_entry_body_has_only_name_and_calories() {
        let body = serde_json::to_value(NewLogEntry::new("apple", 95.0)).unwrap();
        assert_eq!(body, serde_json::json!({ "food_name": "apple", "calories": 95.0 }));
    }

    #[test]
    fn test_goals_fill_missing_fields_with_defaults() {
        let goals: NutritionGoals = serde_json::from_str(r#"{"calories":1800}"#).unwrap();
        assert!((goals.calories - 1800.0).abs() < f64::EPSILON);
        assert!((goals.protein - 50.0).abs() < f64::EPSILON);
        assert!((goals.fat - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_slot_names() {
        let slots: Vec<&str> = MealType::PLANNED.iter().map(|m| m.slot_name()).collect();
        assert_eq!(slots, ["breakfast", "lunch", "dinner", "snacks"]);
        assert_eq!(MealType::from_str_lossy("Brunch"), MealType::Other);
    }
}
