// ABOUTME: Profile and page commands for nutrilog
// ABOUTME: Shows or changes the display name and goals, and prints the rendered page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use nutrilog::{errors::AppResult, models::NutritionGoals, widget::NutritionWidget};
use tracing::info;

use crate::helpers::display::display_goals;

/// Goal targets given on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalTargets {
    /// `--calories`
    pub calories: Option<f64>,
    /// `--protein`
    pub protein: Option<f64>,
    /// `--carbs`
    pub carbs: Option<f64>,
    /// `--fat`
    pub fat: Option<f64>,
}

impl GoalTargets {
    const fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein.is_none()
            && self.carbs.is_none()
            && self.fat.is_none()
    }

    /// Targets that were not given fall back to the defaults, not to the saved goals
    fn into_goals(self) -> NutritionGoals {
        let defaults = NutritionGoals::default();
        NutritionGoals {
            calories: self.calories.unwrap_or(defaults.calories),
            protein: self.protein.unwrap_or(defaults.protein),
            carbs: self.carbs.unwrap_or(defaults.carbs),
            fat: self.fat.unwrap_or(defaults.fat),
        }
    }
}

/// Print the backend's goals, or save new ones
pub async fn goals(widget: &mut NutritionWidget, targets: GoalTargets) -> AppResult<()> {
    if targets.is_empty() {
        display_goals(widget.sync_goals().await);
        return Ok(());
    }

    widget.update_goals(targets.into_goals()).await?;
    println!("Nutrition goals saved");
    display_goals(widget.goals());
    Ok(())
}

/// Print the display name, or save a new one
pub fn name(widget: &mut NutritionWidget, value: Option<&str>) -> AppResult<()> {
    match value {
        Some(value) => {
            widget.change_display_name(value)?;
            info!("Display name saved");
            println!("Display name set to '{value}'");
        }
        None => match widget.display_name() {
            Some(name) => println!("{name}"),
            None => println!("(no display name saved)"),
        },
    }
    Ok(())
}

/// Print the full page with the backend's goals applied
pub async fn render(widget: &mut NutritionWidget) {
    widget.sync_goals().await;
    print!("{}", widget.render_page());
}
