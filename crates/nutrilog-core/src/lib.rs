// ABOUTME: Core types and constants for the nutrilog daily nutrition tracker
// ABOUTME: Foundation crate with error handling, nutrition models, and page constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Nutrilog Core
//!
//! Foundation crate providing shared types and constants for the nutrilog
//! tracker. It changes rarely, so the main crate and its binaries can lean on
//! it without recompiling it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Page region identifiers, backend endpoints, and nutrition defaults
//! - **models**: Nutrition facts, daily totals, log entries, goals, and meal types

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core nutrition data models
pub mod models;
