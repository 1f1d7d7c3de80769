// ABOUTME: Daily log accumulator owning the catalog and the running nutrition totals
// ABOUTME: Add-by-name and reload-from-backend transitions over DailyTotals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition session
//!
//! The session is the single owner of the running totals. It has exactly two
//! transitions: [`NutritionSession::add_food`] and [`NutritionSession::reload`].
//! Neither one talks to the network; the widget does that with what they return.

use tracing::{debug, warn};

use crate::catalog::FoodCatalog;
use nutrilog_core::models::{DailyTotals, LogEntry, NutritionFacts};

/// A food that was found in the catalog and added to the totals
#[derive(Debug, Clone, PartialEq)]
pub struct AddedFood {
    /// Name as given by the caller
    pub name: String,
    /// Facts that were added
    pub facts: NutritionFacts,
}

/// What a reload did with the backend's entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadSummary {
    /// Entries found in the catalog and counted
    pub applied: usize,
    /// Names of entries missing from the catalog, counted as zero
    pub unknown: Vec<String>,
}

/// Session-scoped running nutrition totals
#[derive(Debug, Clone)]
pub struct NutritionSession {
    catalog: FoodCatalog,
    totals: DailyTotals,
}

impl NutritionSession {
    /// Start a session with zero totals
    #[must_use]
    pub fn new(catalog: FoodCatalog) -> Self {
        Self {
            catalog,
            totals: DailyTotals::default(),
        }
    }

    /// The catalog used for lookups
    #[must_use]
    pub const fn catalog(&self) -> &FoodCatalog {
        &self.catalog
    }

    /// Current totals
    #[must_use]
    pub const fn totals(&self) -> &DailyTotals {
        &self.totals
    }

    /// Add a food by name; unknown names change nothing and return `None`
    pub fn add_food(&mut self, name: &str) -> Option<AddedFood> {
        let Some(facts) = self.catalog.lookup(name) else {
            debug!(food = name, "Food not in catalog, nothing added");
            return None;
        };

        self.totals.add(&facts);
        Some(AddedFood {
            name: name.to_owned(),
            facts,
        })
    }

    /// Rebuild totals from the backend log
    ///
    /// Totals are reset first, so the result does not depend on prior state.
    /// Entries whose name is missing from the catalog contribute nothing and
    /// are reported in the summary.
    pub fn reload(&mut self, entries: &[LogEntry]) -> ReloadSummary {
        self.totals.reset();

        let mut summary = ReloadSummary::default();
        for entry in entries {
            match self.catalog.lookup(&entry.food_name) {
                Some(facts) => {
                    self.totals.add(&facts);
                    summary.applied += 1;
                }
                None => summary.unknown.push(entry.food_name.clone()),
            }
        }

        if !summary.unknown.is_empty() {
            warn!(
                unknown = summary.unknown.len(),
                foods = ?summary.unknown,
                "Log entries not in catalog were counted as zero"
            );
        }
        debug!(applied = summary.applied, calories = self.totals.calories, "Totals reloaded");

        summary
    }
}

impl Default for NutritionSession {
    fn default() -> Self {
        Self::new(FoodCatalog::standard())
    }
}
