// ABOUTME: Persistence client abstraction for the remote food log
// ABOUTME: LogBackend trait with HTTP and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Persistence Client
//!
//! The backend's list of logged entries is the source of truth; the session
//! only mirrors it. Every call is a single attempt with no retry and no
//! timeout, and every failure comes back as an [`AppError`] so the caller
//! decides what to do with it.
//!
//! [`AppError`]: nutrilog_core::errors::AppError

/// HTTP implementation talking to the log backend
pub mod http_client;
/// In-process implementation for tests and offline runs
pub mod memory;

pub use http_client::HttpLogClient;
pub use memory::InMemoryLogBackend;

use async_trait::async_trait;
use chrono::NaiveDate;
use nutrilog_core::errors::AppResult;
use nutrilog_core::models::{LogEntry, NewLogEntry, NutritionGoals};

/// Remote food log
///
/// Implementations must be `Send + Sync` so a widget can hold them behind an
/// `Arc` while the host keeps its own handle.
#[async_trait]
pub trait LogBackend: Send + Sync {
    /// Short name used in log fields
    fn name(&self) -> &'static str;

    /// Append one entry to the remote log
    async fn append_entry(&self, entry: &NewLogEntry) -> AppResult<()>;

    /// Fetch the log, optionally for one calendar day
    async fn fetch_entries_for(&self, date: Option<NaiveDate>) -> AppResult<Vec<LogEntry>>;

    /// Fetch the backend's default (current day) log
    async fn fetch_entries(&self) -> AppResult<Vec<LogEntry>> {
        self.fetch_entries_for(None).await
    }

    /// Fetch the user's nutrition goals
    async fn fetch_goals(&self) -> AppResult<NutritionGoals>;

    /// Save the user's nutrition goals, replacing the stored ones
    async fn update_goals(&self, goals: &NutritionGoals) -> AppResult<()>;
}
