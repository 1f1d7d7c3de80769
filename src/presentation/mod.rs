// ABOUTME: Presentation layer turning session state into region updates and HTML
// ABOUTME: Progress calculation, rounded totals view, and the page view model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Presentation Layer
//!
//! Rendering is a pure function of [`PageView`]. Each render replaces whole
//! regions (inner HTML, text, width, or input value) addressed by the ids in
//! [`nutrilog_core::constants::regions`], so rendering the same view twice
//! yields the same updates.

/// HTML fragment and full-page rendering
pub mod html;

pub use html::{
    render_meal_plan, render_page, render_recipe_suggestions, render_regions,
    render_search_results,
};

use nutrilog_core::models::{DailyTotals, NutritionGoals};
use serde::Serialize;

use crate::search::FoodSearchHit;

/// Replacement of one page region
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegionUpdate {
    /// Replace the region's inner HTML
    InnerHtml {
        /// Region id
        id: String,
        /// Escaped HTML
        html: String,
    },
    /// Replace the region's text content
    Text {
        /// Region id
        id: String,
        /// Plain text
        text: String,
    },
    /// Set the region's width in percent
    Width {
        /// Region id
        id: String,
        /// Width, already clamped to `[0, 100]`
        percent: f64,
    },
    /// Set an input region's value
    Value {
        /// Region id
        id: String,
        /// Field value
        value: String,
    },
}

impl RegionUpdate {
    /// Id of the region this update replaces
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::InnerHtml { id, .. }
            | Self::Text { id, .. }
            | Self::Width { id, .. }
            | Self::Value { id, .. } => id,
        }
    }
}

/// Share of a goal reached, clamped to `[0, 100]`
///
/// A non-positive goal reads as fully reached once anything is logged.
#[must_use]
pub fn progress_percentage(consumed: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return if consumed > 0.0 { 100.0 } else { 0.0 };
    }
    (consumed / goal * 100.0).clamp(0.0, 100.0)
}

/// Totals as displayed: whole numbers plus goal progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TotalsView {
    /// Rounded calories
    pub calories: i64,
    /// Rounded protein grams
    pub protein: i64,
    /// Rounded carbohydrate grams
    pub carbs: i64,
    /// Rounded fat grams
    pub fat: i64,
    /// Calorie progress bar width
    pub calorie_progress: f64,
    /// Protein goal progress
    pub protein_progress: f64,
    /// Carbohydrate goal progress
    pub carbs_progress: f64,
    /// Fat goal progress
    pub fat_progress: f64,
}

impl TotalsView {
    /// Build the displayed totals for the given goals
    #[must_use]
    pub fn new(totals: &DailyTotals, goals: &NutritionGoals) -> Self {
        Self {
            calories: totals.calories.round() as i64,
            protein: totals.protein.round() as i64,
            carbs: totals.carbs.round() as i64,
            fat: totals.fat.round() as i64,
            calorie_progress: progress_percentage(totals.calories, goals.calories),
            protein_progress: progress_percentage(totals.protein, goals.protein),
            carbs_progress: progress_percentage(totals.carbs, goals.carbs),
            fat_progress: progress_percentage(totals.fat, goals.fat),
        }
    }
}

/// Everything a render depends on
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    /// Saved display name
    pub display_name: Option<&'a str>,
    /// Last submitted search query
    pub query: Option<&'a str>,
    /// Results of the last search
    pub results: &'a [FoodSearchHit],
    /// Running totals
    pub totals: &'a DailyTotals,
    /// Goals used as progress references
    pub goals: &'a NutritionGoals,
}

impl PageView<'_> {
    /// Displayed totals for this view
    #[must_use]
    pub fn totals_view(&self) -> TotalsView {
        TotalsView::new(self.totals, self.goals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_at_100() {
        assert!((progress_percentage(2500.0, 2000.0) - 100.0).abs() < f64::EPSILON);
        assert!((progress_percentage(95.0, 2000.0) - 4.75).abs() < 1e-9);
        assert!(progress_percentage(0.0, 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_with_non_positive_goal() {
        assert!((progress_percentage(10.0, 0.0) - 100.0).abs() < f64::EPSILON);
        assert!(progress_percentage(0.0, 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_totals_view_rounds_half_up() {
        let totals = DailyTotals {
            calories: 200.0,
            protein: 1.8,
            carbs: 52.5,
            fat: 0.7,
        };
        let view = TotalsView::new(&totals, &NutritionGoals::default());
        assert_eq!((view.calories, view.protein, view.carbs, view.fat), (200, 2, 53, 1));
        assert!((view.calorie_progress - 10.0).abs() < 1e-9);
        assert!((view.carbs_progress - 21.0).abs() < 1e-9);
    }
}
