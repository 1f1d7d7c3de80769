// ABOUTME: Environment configuration management for the nutrition tracker
// ABOUTME: Loads backend, preference, goal, and USDA settings and validates them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use nutrilog_core::constants::goals;
use nutrilog_core::errors::{AppError, AppResult};
use nutrilog_core::models::NutritionGoals;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;
use url::Url;

use super::api_providers::UsdaApiConfig;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Log backend location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend root, e.g. `http://127.0.0.1:5000`
    pub base_url: String,
}

impl BackendConfig {
    /// Load backend configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or("NUTRILOG_API_BASE_URL", DEFAULT_API_BASE_URL),
        }
    }
}

/// Local preference file location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// JSON file holding the durable key-value store
    pub path: PathBuf,
}

impl PreferencesConfig {
    /// Load preference configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            path: env::var("NUTRILOG_PREFERENCES_PATH")
                .map_or_else(|_| default_preferences_path(), PathBuf::from),
        }
    }
}

/// `<data dir>/nutrilog/preferences.json`, or the working directory when the
/// platform has no data directory
#[must_use]
pub fn default_preferences_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nutrilog")
        .join("preferences.json")
}

/// Complete tracker configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Log backend
    pub backend: BackendConfig,
    /// Preference storage
    pub preferences: PreferencesConfig,
    /// Nutrition goals used as progress references
    pub goals: NutritionGoals,
    /// USDA search
    pub usda: UsdaApiConfig,
}

impl TrackerConfig {
    /// Load every section from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            backend: BackendConfig::from_env(),
            preferences: PreferencesConfig::from_env(),
            goals: goals_from_env(),
            usda: UsdaApiConfig::from_env(),
        }
    }

    /// Check that the configuration can be used
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` for a backend URL that is not http(s), a
    /// non-positive calorie goal, or a negative macro goal
    pub fn validate(&self) -> AppResult<()> {
        let url = Url::parse(&self.backend.base_url).map_err(|e| {
            AppError::config(format!(
                "Invalid backend URL '{}': {e}",
                self.backend.base_url
            ))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::config(format!(
                "Backend URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.goals.calories <= 0.0 || !self.goals.calories.is_finite() {
            return Err(AppError::config("Calorie goal must be a positive number"));
        }
        for (name, value) in [
            ("protein", self.goals.protein),
            ("carbs", self.goals.carbs),
            ("fat", self.goals.fat),
        ] {
            if value < 0.0 || !value.is_finite() {
                return Err(AppError::config(format!(
                    "The {name} goal must not be negative"
                )));
            }
        }

        if self.usda.enabled {
            Url::parse(&self.usda.base_url).map_err(|e| {
                AppError::config(format!("Invalid USDA URL '{}': {e}", self.usda.base_url))
            })?;
        }

        Ok(())
    }

    /// Log a one-line summary of the effective configuration
    pub fn log_summary(&self) {
        info!(
            backend.url = %self.backend.base_url,
            preferences.path = %self.preferences.path.display(),
            goals.calories = self.goals.calories,
            usda.enabled = self.usda.enabled,
            "Configuration loaded"
        );
    }
}

fn goals_from_env() -> NutritionGoals {
    NutritionGoals {
        calories: env_f64_or("NUTRILOG_GOAL_CALORIES", goals::DEFAULT_CALORIES),
        protein: env_f64_or("NUTRILOG_GOAL_PROTEIN", goals::DEFAULT_PROTEIN_G),
        carbs: env_f64_or("NUTRILOG_GOAL_CARBS", goals::DEFAULT_CARBS_G),
        fat: env_f64_or("NUTRILOG_GOAL_FAT", goals::DEFAULT_FAT_G),
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_f64_or(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
