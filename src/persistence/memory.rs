// ABOUTME: In-process food log backend for tests and offline sessions
// ABOUTME: Stores appended entries in memory and can be switched into failure mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use nutrilog_core::errors::{AppError, AppResult};
use nutrilog_core::models::{LogEntry, NewLogEntry, NutritionGoals};
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::LogBackend;

const SERVICE_NAME: &str = "in-memory backend";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// [`LogBackend`] that keeps the log in process memory
#[derive(Debug, Default)]
pub struct InMemoryLogBackend {
    entries: RwLock<Vec<LogEntry>>,
    goals: RwLock<NutritionGoals>,
    next_id: AtomicI64,
    fail_appends: AtomicBool,
    fail_fetches: AtomicBool,
}

impl InMemoryLogBackend {
    /// Empty log with default goals
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log pre-populated with entries
    #[must_use]
    pub fn with_entries(entries: Vec<LogEntry>) -> Self {
        let next_id = i64::try_from(entries.len()).unwrap_or(i64::MAX);
        Self {
            entries: RwLock::new(entries),
            next_id: AtomicI64::new(next_id),
            ..Self::default()
        }
    }

    /// Replace the goals served by [`LogBackend::fetch_goals`]
    pub async fn set_goals(&self, goals: NutritionGoals) {
        *self.goals.write().await = goals;
    }

    /// Make every append fail until switched back
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Make every fetch fail until switched back
    pub fn set_fail_fetches(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Copy of the stored log
    pub async fn entries(&self) -> Vec<LogEntry> {
        self.entries.read().await.clone()
    }
}

#[async_trait]
impl LogBackend for InMemoryLogBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn append_entry(&self, entry: &NewLogEntry) -> AppResult<()> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(AppError::external_service(SERVICE_NAME, "append rejected"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut stored = LogEntry::named(entry.food_name.clone());
        stored.id = Some(id);
        stored.calories = Some(entry.calories);
        stored.meal_type = entry.meal_type;
        stored.date = Some(Utc::now().format(DATE_FORMAT).to_string());

        self.entries.write().await.push(stored);
        Ok(())
    }

    async fn fetch_entries_for(&self, date: Option<NaiveDate>) -> AppResult<Vec<LogEntry>> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(AppError::external_service(SERVICE_NAME, "fetch rejected"));
        }

        let entries = self.entries.read().await;
        let Some(date) = date else {
            return Ok(entries.clone());
        };

        let day = date.format("%Y-%m-%d").to_string();
        Ok(entries
            .iter()
            .filter(|entry| entry.date.as_deref().is_some_and(|d| d.starts_with(&day)))
            .cloned()
            .collect())
    }

    async fn fetch_goals(&self) -> AppResult<NutritionGoals> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(AppError::external_service(SERVICE_NAME, "fetch rejected"));
        }
        Ok(*self.goals.read().await)
    }

    async fn update_goals(&self, goals: &NutritionGoals) -> AppResult<()> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(AppError::external_service(SERVICE_NAME, "goal update rejected"));
        }
        *self.goals.write().await = *goals;
        Ok(())
    }
}
