// ABOUTME: Main library entry point for the nutrilog nutrition-tracking widget
// ABOUTME: Food catalog, search, daily totals, log persistence, preferences, and rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrilog
//!
//! A single-user nutrition-tracking widget: search a small food catalog, add
//! foods to a running daily log, persist the log to a backend over HTTP, and
//! render the summary panels (totals, calorie progress, meal plan, recipes).
//!
//! ## Architecture
//!
//! - **Catalog**: fixed per-serving nutrition facts keyed by lowercase name
//! - **Search**: substring search over the catalog, optionally USDA-backed
//! - **Session**: the single owner of the running daily totals
//! - **Persistence**: the `LogBackend` trait and its HTTP client
//! - **Presentation**: pure rendering of page regions
//! - **Preferences**: the durable display name
//! - **Widget**: control flow tying the pieces together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use nutrilog::persistence::HttpLogClient;
//! use nutrilog::preferences::{MemoryKeyValueStore, PreferenceStore};
//! use nutrilog::session::NutritionSession;
//! use nutrilog::widget::NutritionWidget;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = Arc::new(HttpLogClient::new("http://127.0.0.1:5000"));
//!     let mut widget = NutritionWidget::new(
//!         NutritionSession::default(),
//!         backend,
//!         PreferenceStore::new(MemoryKeyValueStore::new()),
//!     );
//!     widget.load().await;
//!     widget.submit_search("a");
//!     widget.add_food("apple").await;
//!     println!("{}", widget.render_page());
//! }
//! ```

/// Built-in food catalog
pub mod catalog;

/// Configuration loaded from the environment
pub mod config;

/// Clients for third-party food data
pub mod external;

/// Structured logging setup
pub mod logging;

/// Remote food log
pub mod persistence;

/// Durable display-name preference
pub mod preferences;

/// Rendering of page regions
pub mod presentation;

/// Food search
pub mod search;

/// Running daily totals
pub mod session;

/// Widget control flow
pub mod widget;

pub use nutrilog_core::{constants, errors, models};
