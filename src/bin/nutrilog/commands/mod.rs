// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for nutrilog
// ABOUTME: Provides access to food logging and profile commands

pub mod food;
pub mod profile;
