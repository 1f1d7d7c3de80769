// ABOUTME: Configuration module for the tracker's environment-driven settings
// ABOUTME: Backend endpoint, preference file location, nutrition goals, and USDA access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for nutrilog
//!
//! Configuration comes from environment variables only. Each section has a
//! `from_env()` constructor that falls back to defaults for unset or
//! unparsable values; [`TrackerConfig::validate`] rejects the combinations
//! that cannot work.

/// External API configuration (USDA `FoodData` Central)
pub mod api_providers;
/// Top-level tracker configuration
pub mod environment;

pub use api_providers::UsdaApiConfig;
pub use environment::{BackendConfig, PreferencesConfig, TrackerConfig};
