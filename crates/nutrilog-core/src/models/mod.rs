// ABOUTME: Core data models for the nutrilog tracker
// ABOUTME: Re-exports nutrition facts, totals, log entries, goals, meals, and recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain serde types shared by the catalog, the session, the persistence
//! client and the renderer. None of them hold behaviour beyond arithmetic on
//! their own fields.

mod nutrition;
mod recipe;

pub use nutrition::{
    DailyTotals, LogEntry, MealType, NewLogEntry, NutritionFacts, NutritionGoals,
};
pub use recipe::{RecipeSuggestion, RECIPE_SUGGESTIONS};
