// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Page region identifiers, backend endpoints, storage keys, and nutrition defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants grouped by domain rather than kept in one flat list.

/// Backend endpoints consumed by the persistence client
pub mod endpoints {
    /// Append one entry to the remote log
    pub const LOG_FOOD: &str = "/api/log-food";
    /// Fetch the remote log
    pub const GET_LOGS: &str = "/api/get-logs";
    /// Fetch the user's nutrition goals
    pub const NUTRITION_GOALS: &str = "/api/nutrition-goals";
    /// Status value the backend uses for a successful write
    pub const STATUS_SUCCESS: &str = "success";
}

/// Identifiers of the page regions replaced on every render
pub mod regions {
    /// Search form
    pub const FOOD_FORM: &str = "food-form";
    /// Search input field
    pub const FOOD_SEARCH: &str = "food-search";
    /// Search results container
    pub const FOOD_RESULTS: &str = "food-results";
    /// Calorie total
    pub const TOTAL_CALORIES: &str = "total-calories";
    /// Protein total
    pub const TOTAL_PROTEIN: &str = "total-protein";
    /// Carbohydrate total
    pub const TOTAL_CARBS: &str = "total-carbs";
    /// Fat total
    pub const TOTAL_FAT: &str = "total-fat";
    /// Calorie progress bar
    pub const PROGRESS_BAR: &str = "progress-bar";
    /// Recipe suggestion container
    pub const RECIPE_SUGGESTIONS: &str = "recipe-suggestions";
    /// Display name input
    pub const USERNAME: &str = "username";
    /// Suffix appended to a meal slot name to form its container id
    pub const MEAL_SLOT_SUFFIX: &str = "-items";
}

/// Durable local key-value storage keys
pub mod storage_keys {
    /// Display name preference
    pub const USERNAME: &str = "username";
}

/// Default nutrition goals, used as progress references
pub mod goals {
    /// Daily calorie reference for the progress bar
    pub const DEFAULT_CALORIES: f64 = 2000.0;
    /// Daily protein goal in grams
    pub const DEFAULT_PROTEIN_G: f64 = 50.0;
    /// Daily carbohydrate goal in grams
    pub const DEFAULT_CARBS_G: f64 = 250.0;
    /// Daily fat goal in grams
    pub const DEFAULT_FAT_G: f64 = 70.0;
}

/// Static page content
pub mod content {
    /// Text shown in every empty meal-plan slot
    pub const MEAL_SLOT_PLACEHOLDER: &str = "Drop food items here";
    /// Label of the add action on a search result
    pub const ADD_TO_LOG_LABEL: &str = "Add to Log";
}

/// Service identity used in logs
pub mod service_names {
    /// Service name reported by the logging setup
    pub const NUTRILOG: &str = "nutrilog";
}
