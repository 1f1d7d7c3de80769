// ABOUTME: Food search over the local catalog, with an optional USDA-backed variant
// ABOUTME: Substring matching in catalog order plus remote-first search with local fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Food search
//!
//! [`search`] is the widget's search: a case-insensitive substring filter over
//! catalog keys that keeps catalog order and never truncates. [`FoodSearch`]
//! layers the USDA `FoodData` Central API in front of it and falls back to the
//! catalog when the remote fails or has nothing.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::FoodCatalog;
use crate::external::UsdaClient;
use nutrilog_core::models::NutritionFacts;

/// One row of the widget's search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSearchHit {
    /// Catalog key (lowercase)
    pub name: String,
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
}

impl FoodSearchHit {
    /// Nutrition facts carried by this hit
    #[must_use]
    pub const fn facts(&self) -> NutritionFacts {
        NutritionFacts::new(self.calories, self.protein, self.carbs, self.fat)
    }
}

/// Filter the catalog by case-insensitive substring match on the food name
///
/// An empty query matches every entry.
#[must_use]
pub fn search(catalog: &FoodCatalog, query: &str) -> Vec<FoodSearchHit> {
    let needle = query.to_lowercase();
    catalog
        .entries()
        .iter()
        .filter(|entry| entry.name.contains(&needle))
        .map(|entry| FoodSearchHit {
            name: entry.name.clone(),
            calories: entry.facts.calories,
            protein: entry.facts.protein,
            carbs: entry.facts.carbs,
            fat: entry.facts.fat,
        })
        .collect()
}

/// Where a search result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodSource {
    /// USDA `FoodData` Central
    Usda,
    /// Built-in catalog
    Local,
}

/// Search result of the remote-first search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSearchResult {
    /// `FoodData` Central id, or `local_<name>` for catalog foods
    pub food_id: String,
    /// Display name
    pub name: String,
    /// Origin of the result
    pub source: FoodSource,
    /// Nutrition facts per serving
    pub nutrients: NutritionFacts,
}

/// Remote-first food search with catalog fallback
pub struct FoodSearch<'a> {
    catalog: &'a FoodCatalog,
    remote: Option<&'a UsdaClient>,
}

impl<'a> FoodSearch<'a> {
    /// Search the catalog only
    #[must_use]
    pub const fn local(catalog: &'a FoodCatalog) -> Self {
        Self {
            catalog,
            remote: None,
        }
    }

    /// Search USDA first, then the catalog
    #[must_use]
    pub const fn with_remote(catalog: &'a FoodCatalog, remote: &'a UsdaClient) -> Self {
        Self {
            catalog,
            remote: Some(remote),
        }
    }

    /// Run a search; an empty query returns nothing without touching the network
    pub async fn search(&self, query: &str) -> Vec<FoodSearchResult> {
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(remote) = self.remote {
            match remote.search_foods(query).await {
                Ok(foods) if !foods.is_empty() => {
                    return foods
                        .into_iter()
                        .map(|food| FoodSearchResult {
                            food_id: food.fdc_id.to_string(),
                            name: food.description,
                            source: FoodSource::Usda,
                            nutrients: food.nutrients,
                        })
                        .collect();
                }
                Ok(_) => debug!(query, "USDA search returned no foods, using local catalog"),
                Err(e) => warn!(query, error = %e, "USDA search failed, using local catalog"),
            }
        }

        search(self.catalog, query)
            .into_iter()
            .map(|hit| FoodSearchResult {
                food_id: format!("local_{}", hit.name.replace(' ', "_")),
                name: title_case(&hit.name),
                source: FoodSource::Local,
                nutrients: hit.facts(),
            })
            .collect()
    }
}

fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect::<String>()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(hits: &[FoodSearchHit]) -> Vec<&str> {
        hits.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_search_a_keeps_catalog_order_and_excludes_rice() {
        let catalog = FoodCatalog::standard();
        let hits = search(&catalog, "a");
        assert_eq!(names(&hits), ["apple", "banana", "chicken breast"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = FoodCatalog::standard();
        assert_eq!(names(&search(&catalog, "BREAST")), ["chicken breast"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = FoodCatalog::standard();
        assert_eq!(search(&catalog, "").len(), catalog.len());
    }

    #[test]
    fn test_search_matches_exactly_the_containing_entries() {
        let catalog = FoodCatalog::standard();
        for query in ["", "a", "an", "ice", "Ch", "e", "z", "apple pie", " "] {
            let expected: Vec<&str> = catalog
                .entries()
                .iter()
                .filter(|e| e.name.contains(&query.to_lowercase()))
                .map(|e| e.name.as_str())
                .collect();
            assert_eq!(names(&search(&catalog, query)), expected, "query {query:?}");
        }
    }

    #[test]
    fn test_hit_carries_catalog_facts() {
        let catalog = FoodCatalog::standard();
        let hits = search(&catalog, "chicken");
        assert_eq!(hits[0].facts(), catalog.lookup("chicken breast").unwrap());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("chicken breast"), "Chicken Breast");
        assert_eq!(title_case("rice"), "Rice");
    }

    #[tokio::test]
    async fn test_local_food_search_ids_and_names() {
        let catalog = FoodCatalog::standard();
        let results = FoodSearch::local(&catalog).search("chick").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].food_id, "local_chicken_breast");
        assert_eq!(results[0].name, "Chicken Breast");
        assert_eq!(results[0].source, FoodSource::Local);

        assert!(FoodSearch::local(&catalog).search("").await.is_empty());
    }
}
