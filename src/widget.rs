// ABOUTME: Widget controller wiring catalog, session, backend, preferences, and rendering
// ABOUTME: Drives load, search, add-to-log, and display-name changes for one page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition widget
//!
//! Control flow for one page. On [`NutritionWidget::load`] the display name is
//! restored and totals are rebuilt from the backend log. Searching fills the
//! result list; adding a food updates totals before the backend is asked to
//! append. Backend failures are logged and never reach rendered output.

use std::sync::Arc;

use nutrilog_core::errors::{AppError, AppResult};
use nutrilog_core::models::{DailyTotals, NewLogEntry, NutritionGoals};
use tracing::{debug, error, info, warn};

use crate::persistence::LogBackend;
use crate::preferences::PreferenceStore;
use crate::presentation::{self, PageView, RegionUpdate};
use crate::search::{self, FoodSearchHit};
use crate::session::{AddedFood, NutritionSession, ReloadSummary};

/// Result of an "Add to Log" action
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Name not in the catalog; nothing changed and nothing was sent
    NotInCatalog,
    /// Totals were updated and an append was attempted
    Logged {
        /// What was added to the totals
        food: AddedFood,
        /// Whether the backend acknowledged the append
        persisted: bool,
    },
}

/// The nutrition widget
pub struct NutritionWidget {
    session: NutritionSession,
    backend: Arc<dyn LogBackend>,
    preferences: PreferenceStore,
    goals: NutritionGoals,
    display_name: Option<String>,
    query: Option<String>,
    results: Vec<FoodSearchHit>,
}

impl NutritionWidget {
    /// Widget with zero totals and default goals; call [`Self::load`] next
    #[must_use]
    pub fn new(
        session: NutritionSession,
        backend: Arc<dyn LogBackend>,
        preferences: PreferenceStore,
    ) -> Self {
        Self {
            session,
            backend,
            preferences,
            goals: NutritionGoals::default(),
            display_name: None,
            query: None,
            results: Vec::new(),
        }
    }

    /// Use the given goals as progress references
    #[must_use]
    pub fn with_goals(mut self, goals: NutritionGoals) -> Self {
        self.goals = goals;
        self
    }

    /// Restore the display name and rebuild totals from the backend log
    ///
    /// Returns `None` when the log could not be fetched; totals are then left
    /// as they were.
    pub async fn load(&mut self) -> Option<ReloadSummary> {
        match self.preferences.get() {
            Ok(name) => self.display_name = name,
            Err(e) => warn!(error = %e, "Could not read saved display name"),
        }

        self.reload().await
    }

    /// Rebuild totals from the backend log
    pub async fn reload(&mut self) -> Option<ReloadSummary> {
        match self.backend.fetch_entries().await {
            Ok(entries) => {
                let summary = self.session.reload(&entries);
                info!(
                    backend = self.backend.name(),
                    entries = entries.len(),
                    calories = self.session.totals().calories,
                    "Food log loaded"
                );
                Some(summary)
            }
            Err(e) => {
                error!(backend = self.backend.name(), error = %e, "Error loading food log");
                None
            }
        }
    }

    /// Replace goals with the backend's; keeps the current goals on failure
    pub async fn sync_goals(&mut self) -> &NutritionGoals {
        match self.backend.fetch_goals().await {
            Ok(goals) => self.goals = goals,
            Err(e) => warn!(
                backend = self.backend.name(),
                error = %e,
                "Could not fetch nutrition goals, keeping current goals"
            ),
        }
        &self.goals
    }

    /// Save new goals to the backend and use them once it acknowledges
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a target that is not a positive number, or
    /// the backend's error; the current goals are kept in both cases.
    pub async fn update_goals(&mut self, goals: NutritionGoals) -> AppResult<()> {
        let targets = [goals.calories, goals.protein, goals.carbs, goals.fat];
        if targets.iter().any(|target| !target.is_finite() || *target <= 0.0) {
            return Err(AppError::invalid_input(
                "Nutrition goals must be positive numbers",
            ));
        }

        self.backend.update_goals(&goals).await?;
        info!(backend = self.backend.name(), calories = goals.calories, "Nutrition goals updated");
        self.goals = goals;
        Ok(())
    }

    /// Run a catalog search and keep its results for rendering
    pub fn submit_search(&mut self, query: &str) -> &[FoodSearchHit] {
        self.results = search::search(self.session.catalog(), query);
        self.query = Some(query.to_owned());
        debug!(query, hits = self.results.len(), "Search submitted");
        &self.results
    }

    /// Add a food to the totals, then append it to the backend log
    ///
    /// A failed append is logged and the local totals keep the food.
    pub async fn add_food(&mut self, name: &str) -> AddOutcome {
        let Some(food) = self.session.add_food(name) else {
            return AddOutcome::NotInCatalog;
        };

        let entry = NewLogEntry::new(food.name.clone(), food.facts.calories);
        let persisted = match self.backend.append_entry(&entry).await {
            Ok(()) => {
                info!(food = %food.name, calories = food.facts.calories, "Food logged");
                true
            }
            Err(e) => {
                error!(
                    backend = self.backend.name(),
                    food = %food.name,
                    error = %e,
                    "Error logging food"
                );
                false
            }
        };

        AddOutcome::Logged { food, persisted }
    }

    /// Save a new display name; any string is accepted
    ///
    /// # Errors
    ///
    /// Returns an error if the preference store cannot be written. The
    /// in-memory name is updated either way.
    pub fn change_display_name(&mut self, value: &str) -> AppResult<()> {
        self.display_name = Some(value.to_owned());
        self.preferences.set(value)
    }

    /// Current totals
    #[must_use]
    pub const fn totals(&self) -> &DailyTotals {
        self.session.totals()
    }

    /// Current goals
    #[must_use]
    pub const fn goals(&self) -> &NutritionGoals {
        &self.goals
    }

    /// Display name restored on load or last changed
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Results of the last search
    #[must_use]
    pub fn results(&self) -> &[FoodSearchHit] {
        &self.results
    }

    /// Snapshot of everything a render depends on
    #[must_use]
    pub fn view(&self) -> PageView<'_> {
        PageView {
            display_name: self.display_name.as_deref(),
            query: self.query.as_deref(),
            results: &self.results,
            totals: self.session.totals(),
            goals: &self.goals,
        }
    }

    /// Region updates for the current state
    #[must_use]
    pub fn render(&self) -> Vec<RegionUpdate> {
        presentation::render_regions(&self.view())
    }

    /// Full HTML page for the current state
    #[must_use]
    pub fn render_page(&self) -> String {
        presentation::render_page(&self.view())
    }
}
