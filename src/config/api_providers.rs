// ABOUTME: External API provider configuration for food data services
// ABOUTME: Handles USDA FoodData Central settings loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::env;

use crate::external::UsdaClientConfig;

/// USDA `FoodData` Central configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsdaApiConfig {
    /// API key (`DEMO_KEY` when unset)
    pub api_key: String,
    /// USDA API base URL
    pub base_url: String,
    /// Search cache lifetime in seconds
    pub cache_ttl_secs: u64,
    /// Use the USDA API for remote-first searches
    pub enabled: bool,
}

impl Default for UsdaApiConfig {
    fn default() -> Self {
        let client = UsdaClientConfig::default();
        Self {
            api_key: client.api_key,
            base_url: client.base_url,
            cache_ttl_secs: client.cache_ttl_secs,
            enabled: true,
        }
    }
}

impl UsdaApiConfig {
    /// Load USDA configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: env::var("USDA_API_KEY").unwrap_or(defaults.api_key),
            base_url: env::var("USDA_API_BASE_URL").unwrap_or(defaults.base_url),
            cache_ttl_secs: env::var("USDA_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
            enabled: env::var("USDA_SEARCH_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.enabled),
        }
    }

    /// Client settings derived from this configuration
    #[must_use]
    pub fn client_config(&self) -> UsdaClientConfig {
        UsdaClientConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            cache_ttl_secs: self.cache_ttl_secs,
            ..UsdaClientConfig::default()
        }
    }
}
