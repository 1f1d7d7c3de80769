// ABOUTME: Static food catalog mapping lowercase food names to nutrition facts
// ABOUTME: Case-insensitive lookup over an insertion-ordered, read-only entry list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food catalog
//!
//! The catalog is built once and never mutated. Keys are unique and stored
//! lowercase; iteration follows declaration order, which is also the order
//! search results come back in.

use nutrilog_core::errors::{AppError, AppResult};
use nutrilog_core::models::NutritionFacts;
use serde::Serialize;

const STANDARD_FOODS: [(&str, NutritionFacts); 4] = [
    ("apple", NutritionFacts::new(95.0, 0.5, 25.0, 0.3)),
    ("banana", NutritionFacts::new(105.0, 1.3, 27.0, 0.4)),
    ("chicken breast", NutritionFacts::new(165.0, 31.0, 0.0, 3.6)),
    ("rice", NutritionFacts::new(130.0, 2.7, 28.0, 0.3)),
];

const EXTRA_BACKEND_FOODS: [(&str, NutritionFacts); 2] = [
    ("egg", NutritionFacts::new(70.0, 6.0, 0.0, 5.0)),
    ("milk", NutritionFacts::new(103.0, 8.0, 12.0, 2.4)),
];

/// One named food with fixed macro values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Lowercase food name, unique within the catalog
    pub name: String,
    /// Nutrition facts of one serving
    pub facts: NutritionFacts,
}

/// Read-only food database
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalog {
    entries: Vec<CatalogEntry>,
}

impl FoodCatalog {
    /// The built-in catalog: apple, banana, chicken breast, rice
    #[must_use]
    pub fn standard() -> Self {
        Self::fixed(&STANDARD_FOODS)
    }

    /// The catalog the log backend searches when USDA is unavailable
    ///
    /// The standard four foods followed by egg and milk.
    #[must_use]
    pub fn backend_fallback() -> Self {
        Self::fixed(&[STANDARD_FOODS.as_slice(), EXTRA_BACKEND_FOODS.as_slice()].concat())
    }

    fn fixed(foods: &[(&str, NutritionFacts)]) -> Self {
        let entries = foods
            .iter()
            .map(|(name, facts)| CatalogEntry {
                name: (*name).to_owned(),
                facts: *facts,
            })
            .collect();

        Self { entries }
    }

    /// Build a catalog from custom entries
    ///
    /// Names are trimmed and lowercased; order is preserved.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name, for two names that collide
    /// after normalisation, or for a value that is negative or not finite.
    pub fn from_entries<I, S>(entries: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = (S, NutritionFacts)>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<CatalogEntry> = Vec::new();
        for (raw_name, facts) in entries {
            let name = raw_name.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(AppError::invalid_input("Catalog food name cannot be empty"));
            }
            if normalized.iter().any(|entry| entry.name == name) {
                return Err(
                    AppError::invalid_input(format!("Duplicate catalog food '{name}'"))
                        .with_resource_id(name),
                );
            }
            let values = [facts.calories, facts.protein, facts.carbs, facts.fat];
            if values.iter().any(|value| !value.is_finite() || *value < 0.0) {
                return Err(AppError::invalid_input(format!(
                    "Nutrition facts for '{name}' must be finite and non-negative"
                ))
                .with_resource_id(name));
            }
            normalized.push(CatalogEntry { name, facts });
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Look up a food by name, ignoring case
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<NutritionFacts> {
        self.lookup_entry(name).map(|entry| entry.facts)
    }

    /// Look up the full catalog entry for a name, ignoring case
    #[must_use]
    pub fn lookup_entry(&self, name: &str) -> Option<&CatalogEntry> {
        let key = name.to_lowercase();
        self.entries.iter().find(|entry| entry.name == key)
    }

    /// Entries in declaration order
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of foods in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no foods
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = FoodCatalog::standard();
        let apple = catalog.lookup("APPLE").unwrap();
        assert!((apple.calories - 95.0).abs() < f64::EPSILON);
        assert!(catalog.lookup("Chicken Breast").is_some());
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let catalog = FoodCatalog::standard();
        assert!(catalog.lookup("unknown-food").is_none());
        // Lookup does not trim, only lowercases.
        assert!(catalog.lookup(" apple").is_none());
    }

    #[test]
    fn test_standard_order() {
        let catalog = FoodCatalog::standard();
        let names: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["apple", "banana", "chicken breast", "rice"]);
    }

    #[test]
    fn test_from_entries_normalizes_keys() {
        let catalog = FoodCatalog::from_entries([
            ("  Egg ", NutritionFacts::new(70.0, 6.0, 0.0, 5.0)),
            ("Milk", NutritionFacts::new(103.0, 8.0, 12.0, 2.4)),
        ])
        .unwrap();
        assert_eq!(catalog.entries()[0].name, "egg");
        assert!(catalog.lookup("MILK").is_some());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_from_entries_rejects_duplicates_after_normalisation() {
        let facts = NutritionFacts::new(1.0, 0.0, 0.0, 0.0);
        let err = FoodCatalog::from_entries([("Apple", facts), ("apple ", facts)]).unwrap_err();
        assert_eq!(err.context.resource_id.as_deref(), Some("apple"));

        assert!(FoodCatalog::from_entries([("   ", facts)]).is_err());
    }

    #[test]
    fn test_from_entries_rejects_negative_and_non_finite_facts() {
        for facts in [
            NutritionFacts::new(-50.0, 0.0, 0.0, 0.0),
            NutritionFacts::new(10.0, f64::NAN, 0.0, 0.0),
            NutritionFacts::new(10.0, 0.0, f64::INFINITY, 0.0),
            NutritionFacts::new(10.0, 0.0, 0.0, -0.1),
        ] {
            let err = FoodCatalog::from_entries([("granola", facts)]).unwrap_err();
            assert_eq!(err.code, nutrilog_core::errors::ErrorCode::InvalidInput);
            assert_eq!(err.context.resource_id.as_deref(), Some("granola"));
        }

        let zero = NutritionFacts::new(0.0, 0.0, 0.0, 0.0);
        assert!(FoodCatalog::from_entries([("water", zero)]).is_ok());
    }

    #[test]
    fn test_backend_fallback_adds_egg_and_milk() {
        let catalog = FoodCatalog::backend_fallback();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["apple", "banana", "chicken breast", "rice", "egg", "milk"]
        );

        let milk = catalog.lookup("Milk").unwrap();
        assert!((milk.calories - 103.0).abs() < f64::EPSILON);
        assert!((milk.fat - 2.4).abs() < f64::EPSILON);
        assert!(FoodCatalog::standard().lookup("egg").is_none());
    }
}
