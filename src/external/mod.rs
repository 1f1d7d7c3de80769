// ABOUTME: External API client modules (USDA FoodData Central)
// ABOUTME: Provides remote food search for the remote-first search path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

pub mod usda_client;

pub use usda_client::{UsdaClient, UsdaClientConfig, UsdaFood};
