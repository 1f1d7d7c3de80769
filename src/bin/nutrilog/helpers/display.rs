// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for nutrilog
// ABOUTME: Provides consistent display functions for search results and totals

use nutrilog::{
    models::NutritionGoals,
    presentation::TotalsView,
    search::{FoodSearchHit, FoodSearchResult, FoodSource},
    widget::AddOutcome,
};

/// Display catalog search hits
pub fn display_search_hits(query: &str, hits: &[FoodSearchHit]) {
    if hits.is_empty() {
        println!("No foods match '{query}'");
        return;
    }

    println!("{:<20} {:>8} {:>8} {:>8} {:>8}", "FOOD", "KCAL", "PROTEIN", "CARBS", "FAT");
    println!("{}", "-".repeat(56));
    for hit in hits {
        println!(
            "{:<20} {:>8} {:>7}g {:>7}g {:>7}g",
            hit.name, hit.calories, hit.protein, hit.carbs, hit.fat
        );
    }
}

/// Display remote-first search results with their source
pub fn display_food_results(query: &str, results: &[FoodSearchResult]) {
    if results.is_empty() {
        println!("No foods match '{query}'");
        return;
    }

    for result in results {
        let source = match result.source {
            FoodSource::Usda => "usda",
            FoodSource::Local => "local",
        };
        println!("[{source}] {} ({})", result.name, result.food_id);
        println!(
            "   {} kcal | P: {}g | C: {}g | F: {}g",
            result.nutrients.calories,
            result.nutrients.protein,
            result.nutrients.carbs,
            result.nutrients.fat
        );
    }
}

/// Display what an add did
pub fn display_add_outcome(food: &str, outcome: &AddOutcome) {
    match outcome {
        AddOutcome::NotInCatalog => println!("'{food}' is not in the food catalog"),
        AddOutcome::Logged {
            food,
            persisted: true,
        } => println!("Added {} ({} kcal)", food.name, food.facts.calories),
        AddOutcome::Logged {
            food,
            persisted: false,
        } => {
            println!("Added {} ({} kcal) to today's totals", food.name, food.facts.calories);
            println!("WARNING the backend did not save it; it will be gone after a reload");
        }
    }
}

/// Display the rounded totals and goal progress
pub fn display_totals(display_name: Option<&str>, totals: &TotalsView) {
    match display_name {
        Some(name) if !name.is_empty() => println!("\nToday for {name}"),
        _ => println!("\nToday"),
    }
    println!("{}", "=".repeat(40));
    println!("   Calories: {:>6}   ({:.0}%)", totals.calories, totals.calorie_progress);
    println!("   Protein:  {:>6}g  ({:.0}%)", totals.protein, totals.protein_progress);
    println!("   Carbs:    {:>6}g  ({:.0}%)", totals.carbs, totals.carbs_progress);
    println!("   Fat:      {:>6}g  ({:.0}%)", totals.fat, totals.fat_progress);
}

/// Display the daily targets
pub fn display_goals(goals: &NutritionGoals) {
    println!("Daily goals");
    println!("{}", "=".repeat(40));
    println!("   Calories: {:>6}", goals.calories);
    println!("   Protein:  {:>6}g", goals.protein);
    println!("   Carbs:    {:>6}g", goals.carbs);
    println!("   Fat:      {:>6}g", goals.fat);
}
