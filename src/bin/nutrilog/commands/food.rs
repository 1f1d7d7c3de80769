// ABOUTME: Food commands for nutrilog
// ABOUTME: Handles search, add-to-log, and summary operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrilog::{
    catalog::FoodCatalog,
    config::TrackerConfig,
    errors::{AppError, AppResult},
    external::UsdaClient,
    search::FoodSearch,
    widget::{AddOutcome, NutritionWidget},
};
use tracing::{info, warn};

use crate::helpers::display::{
    display_add_outcome, display_food_results, display_search_hits, display_totals,
};

type Result<T> = AppResult<T>;

/// Search the catalog the way the widget does
pub fn search(widget: &mut NutritionWidget, query: &str) {
    let hits = widget.submit_search(query);
    display_search_hits(query, hits);
}

/// Search USDA first and fall back to the backend's local food table
pub async fn search_remote(config: &TrackerConfig, query: &str) -> Result<()> {
    let catalog = FoodCatalog::backend_fallback();

    let results = if config.usda.enabled {
        let client = UsdaClient::new(config.usda.client_config())?;
        FoodSearch::with_remote(&catalog, &client).search(query).await
    } else {
        warn!("USDA search is disabled, searching the local catalog");
        FoodSearch::local(&catalog).search(query).await
    };

    display_food_results(query, &results);
    Ok(())
}

/// Add a food to today's log
pub async fn add(widget: &mut NutritionWidget, food: &str) -> Result<()> {
    info!(food, "Adding food to log");

    let outcome = widget.add_food(food).await;
    display_add_outcome(food, &outcome);

    if outcome == AddOutcome::NotInCatalog {
        return Err(AppError::not_found(format!("Food '{food}'")));
    }

    display_totals(widget.display_name(), &widget.view().totals_view());
    Ok(())
}

/// Print totals against the backend's goals
pub async fn summary(widget: &mut NutritionWidget) {
    widget.sync_goals().await;
    display_totals(widget.display_name(), &widget.view().totals_view());
}
