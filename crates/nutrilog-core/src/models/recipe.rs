// ABOUTME: Recipe suggestion model for the static suggestions panel
// ABOUTME: Defines RecipeSuggestion and the fixed list shown on every page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// A recipe shown on the suggestions panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecipeSuggestion {
    /// Recipe title
    pub name: &'static str,
    /// Calories per serving
    pub calories: u32,
}

/// Suggestions rendered regardless of what has been logged
pub const RECIPE_SUGGESTIONS: [RecipeSuggestion; 3] = [
    RecipeSuggestion {
        name: "Healthy Smoothie Bowl",
        calories: 350,
    },
    RecipeSuggestion {
        name: "Grilled Chicken Salad",
        calories: 400,
    },
    RecipeSuggestion {
        name: "Quinoa Buddha Bowl",
        calories: 450,
    },
];
