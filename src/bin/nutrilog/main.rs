// ABOUTME: Nutrilog CLI - terminal host for the nutrition-tracking widget
// ABOUTME: Searches foods, logs them to the backend, and prints totals or the rendered page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Search the built-in catalog
//! nutrilog search an
//!
//! # Search USDA FoodData Central first, falling back to the catalog
//! nutrilog search "greek yogurt" --remote
//!
//! # Log a food and print the new totals
//! nutrilog add "chicken breast"
//!
//! # Show today's totals against the goals
//! nutrilog summary
//!
//! # Show the goals, or save new ones (missing targets use the defaults)
//! nutrilog goals
//! nutrilog goals --calories 1800 --protein 90
//!
//! # Show or change the display name
//! nutrilog name
//! nutrilog name Dana
//!
//! # Print the full page as HTML
//! nutrilog render > today.html
//! ```

mod commands;
mod helpers;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use nutrilog::{
    catalog::FoodCatalog,
    config::TrackerConfig,
    errors::AppResult,
    logging::LoggingConfig,
    persistence::HttpLogClient,
    preferences::{FileKeyValueStore, PreferenceStore},
    session::NutritionSession,
    widget::NutritionWidget,
};
use tracing::debug;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrilog",
    about = "Daily nutrition log",
    long_about = "Search foods, log them to the nutrition backend, and view today's totals."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Search foods by name
    Search {
        /// Case-insensitive name fragment
        query: String,

        /// Ask USDA FoodData Central first
        #[arg(long)]
        remote: bool,
    },

    /// Add a catalog food to today's log
    Add {
        /// Food name, e.g. "apple"
        food: String,
    },

    /// Show today's totals and goal progress
    Summary,

    /// Show the nutrition goals, or save them when any target is given
    Goals {
        /// Daily calorie target
        #[arg(long)]
        calories: Option<f64>,

        /// Protein target in grams
        #[arg(long)]
        protein: Option<f64>,

        /// Carbohydrate target in grams
        #[arg(long)]
        carbs: Option<f64>,

        /// Fat target in grams
        #[arg(long)]
        fat: Option<f64>,
    },

    /// Show the display name, or set it when a value is given
    Name {
        /// New display name
        value: Option<String>,
    },

    /// Print the full page as HTML
    Render,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    let mut config = TrackerConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.backend.base_url = api_url;
    }
    config.validate()?;
    config.log_summary();

    let mut widget = build_widget(&config);
    if let Some(summary) = widget.load().await {
        debug!(applied = summary.applied, unknown = summary.unknown.len(), "Widget loaded");
    }

    match cli.command {
        Command::Search { query, remote } => {
            if remote {
                commands::food::search_remote(&config, &query).await?;
            } else {
                commands::food::search(&mut widget, &query);
            }
        }
        Command::Add { food } => commands::food::add(&mut widget, &food).await?,
        Command::Summary => commands::food::summary(&mut widget).await,
        Command::Goals {
            calories,
            protein,
            carbs,
            fat,
        } => {
            let targets = commands::profile::GoalTargets {
                calories,
                protein,
                carbs,
                fat,
            };
            commands::profile::goals(&mut widget, targets).await?;
        }
        Command::Name { value } => commands::profile::name(&mut widget, value.as_deref())?,
        Command::Render => commands::profile::render(&mut widget).await,
    }

    Ok(())
}

fn build_widget(config: &TrackerConfig) -> NutritionWidget {
    let backend = Arc::new(HttpLogClient::new(config.backend.base_url.clone()));
    let preferences = PreferenceStore::new(FileKeyValueStore::new(config.preferences.path.clone()));

    NutritionWidget::new(
        NutritionSession::new(FoodCatalog::standard()),
        backend,
        preferences,
    )
    .with_goals(config.goals)
}
