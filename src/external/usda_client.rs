// ABOUTME: USDA FoodData Central API client for remote food search
// ABOUTME: Maps search hits to nutrition facts and caches results per query
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! USDA `FoodData` Central API Client
//!
//! Only the search endpoint is used. Each hit's energy, protein,
//! carbohydrate and fat values are picked out of its nutrient list by name;
//! a nutrient the API leaves out counts as zero.
//!
//! # API Reference
//! USDA `FoodData` Central API: <https://fdc.nal.usda.gov/api-guide.html>

use nutrilog_core::errors::{AppError, AppResult};
use nutrilog_core::models::NutritionFacts;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

const SERVICE_NAME: &str = "USDA API";

const NUTRIENT_ENERGY: &str = "Energy";
const NUTRIENT_PROTEIN: &str = "Protein";
const NUTRIENT_CARBS: &str = "Carbohydrate, by difference";
const NUTRIENT_FAT: &str = "Total lipid (fat)";

/// USDA API client configuration
#[derive(Debug, Clone)]
pub struct UsdaClientConfig {
    /// USDA API key (`DEMO_KEY` works with tight limits)
    pub api_key: String,
    /// Base URL for USDA API (default: <https://api.nal.usda.gov/fdc/v1>)
    pub base_url: String,
    /// Cache TTL in seconds (default: 86400 = 24 hours)
    pub cache_ttl_secs: u64,
    /// Number of foods requested per search
    pub page_size: u32,
    /// `FoodData` Central data type filter
    pub data_type: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for UsdaClientConfig {
    fn default() -> Self {
        Self {
            api_key: "DEMO_KEY".to_owned(),
            base_url: "https://api.nal.usda.gov/fdc/v1".to_owned(),
            cache_ttl_secs: 86400,
            page_size: 10,
            data_type: "Survey (FNDDS)".to_owned(),
            timeout_secs: 5,
        }
    }
}

/// A food returned by the USDA search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsdaFood {
    /// `FoodData` Central ID
    pub fdc_id: u64,
    /// Food description
    pub description: String,
    /// Macro values extracted from the nutrient list
    pub nutrients: NutritionFacts,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    foods: Vec<SearchFood>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchFood {
    fdc_id: u64,
    description: String,
    #[serde(default)]
    food_nutrients: Vec<SearchNutrient>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchNutrient {
    nutrient_name: String,
    #[serde(default)]
    value: Option<f64>,
}

impl SearchFood {
    fn nutrient(&self, name: &str) -> f64 {
        self.food_nutrients
            .iter()
            .find(|n| n.nutrient_name == name)
            .and_then(|n| n.value)
            .unwrap_or(0.0)
    }

    fn into_food(self) -> UsdaFood {
        let nutrients = NutritionFacts::new(
            self.nutrient(NUTRIENT_ENERGY),
            self.nutrient(NUTRIENT_PROTEIN),
            self.nutrient(NUTRIENT_CARBS),
            self.nutrient(NUTRIENT_FAT),
        );
        UsdaFood {
            fdc_id: self.fdc_id,
            description: self.description,
            nutrients,
        }
    }
}

/// Cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

/// USDA `FoodData` Central API Client
pub struct UsdaClient {
    config: UsdaClientConfig,
    http_client: reqwest::Client,
    search_cache: Arc<RwLock<HashMap<String, CacheEntry<Vec<UsdaFood>>>>>,
}

impl UsdaClient {
    /// Create a new USDA API client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(config: UsdaClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build USDA HTTP client: {e}")))?;

        Ok(Self {
            config,
            http_client,
            search_cache: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Search for foods by query string
    ///
    /// # Errors
    ///
    /// Returns an error for an empty query, a transport failure, a non-2xx
    /// status, or a body that is not a search response
    pub async fn search_foods(&self, query: &str) -> AppResult<Vec<UsdaFood>> {
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let cache_key = query.to_lowercase();
        {
            let cache = self.search_cache.read().await;
            if let Some(entry) = cache.get(&cache_key) {
                if Instant::now() < entry.expires_at {
                    debug!(query, "USDA search cache hit");
                    return Ok(entry.data.clone());
                }
            }
        }

        let url = format!("{}/foods/search", self.config.base_url.trim_end_matches('/'));
        let page_size = self.config.page_size.to_string();
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("query", query),
                ("dataType", self.config.data_type.as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::external_service(SERVICE_NAME, e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!(
                    "HTTP {}: {}",
                    response.status(),
                    response.text().await.unwrap_or_default()
                ),
            ));
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })?;

        let foods: Vec<UsdaFood> = search_response
            .foods
            .into_iter()
            .map(SearchFood::into_food)
            .collect();

        {
            let now = Instant::now();
            let mut cache = self.search_cache.write().await;
            cache.retain(|_, entry| entry.expires_at > now);
            cache.insert(
                cache_key,
                CacheEntry {
                    data: foods.clone(),
                    expires_at: now + Duration::from_secs(self.config.cache_ttl_secs),
                },
            );
        }

        Ok(foods)
    }

    /// Clear the search cache
    pub async fn clear_cache(&self) {
        self.search_cache.write().await.clear();
    }

    /// Number of cached queries
    pub async fn cache_len(&self) -> usize {
        self.search_cache.read().await.len()
    }
}
