// ABOUTME: HTML rendering for search results, totals, meal plan, and recipe panels
// ABOUTME: Produces escaped fragments per region and a standalone page document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use html_escape::{encode_double_quoted_attribute, encode_text};
use nutrilog_core::constants::{content, regions};
use nutrilog_core::models::{MealType, RecipeSuggestion, RECIPE_SUGGESTIONS};

use super::{PageView, RegionUpdate};
use crate::search::FoodSearchHit;

/// Search results, one `food-item` block per hit
#[must_use]
pub fn render_search_results(hits: &[FoodSearchHit]) -> String {
    hits.iter()
        .map(|food| {
            format!(
                r#"
<div class="food-item">
    <div class="d-flex justify-content-between">
        <strong>{name}</strong>
        <span>{calories} cal</span>
    </div>
    <div class="small text-muted">
        P: {protein}g | C: {carbs}g | F: {fat}g
    </div>
    <button class="btn btn-sm btn-primary mt-2" data-action="add-to-log" data-food-name="{food_attr}">
        {label}
    </button>
</div>"#,
                name = encode_text(&food.name),
                calories = food.calories,
                protein = food.protein,
                carbs = food.carbs,
                fat = food.fat,
                food_attr = encode_double_quoted_attribute(&food.name),
                label = content::ADD_TO_LOG_LABEL,
            )
        })
        .collect()
}

/// Placeholder shown in every meal-plan slot
#[must_use]
pub fn render_meal_plan() -> String {
    format!(
        r#"<p class="text-muted">{}</p>"#,
        content::MEAL_SLOT_PLACEHOLDER
    )
}

/// Recipe cards
#[must_use]
pub fn render_recipe_suggestions(suggestions: &[RecipeSuggestion]) -> String {
    suggestions
        .iter()
        .map(|recipe| {
            format!(
                r#"
<div class="col-md-4">
    <div class="card recipe-card">
        <div class="card-body">
            <h6>{}</h6>
            <p class="text-muted">{} calories</p>
        </div>
    </div>
</div>"#,
                encode_text(recipe.name),
                recipe.calories
            )
        })
        .collect()
}

fn meal_slot_id(meal: MealType) -> String {
    format!("{}{}", meal.slot_name(), regions::MEAL_SLOT_SUFFIX)
}

/// Every region update for a view, in page order
#[must_use]
pub fn render_regions(view: &PageView<'_>) -> Vec<RegionUpdate> {
    let totals = view.totals_view();
    let mut updates = vec![
        RegionUpdate::Value {
            id: regions::USERNAME.to_owned(),
            value: view.display_name.unwrap_or_default().to_owned(),
        },
        RegionUpdate::InnerHtml {
            id: regions::FOOD_RESULTS.to_owned(),
            html: render_search_results(view.results),
        },
        RegionUpdate::Text {
            id: regions::TOTAL_CALORIES.to_owned(),
            text: totals.calories.to_string(),
        },
        RegionUpdate::Text {
            id: regions::TOTAL_PROTEIN.to_owned(),
            text: totals.protein.to_string(),
        },
        RegionUpdate::Text {
            id: regions::TOTAL_CARBS.to_owned(),
            text: totals.carbs.to_string(),
        },
        RegionUpdate::Text {
            id: regions::TOTAL_FAT.to_owned(),
            text: totals.fat.to_string(),
        },
        RegionUpdate::Width {
            id: regions::PROGRESS_BAR.to_owned(),
            percent: totals.calorie_progress,
        },
    ];

    let placeholder = render_meal_plan();
    updates.extend(MealType::PLANNED.into_iter().map(|meal| RegionUpdate::InnerHtml {
        id: meal_slot_id(meal),
        html: placeholder.clone(),
    }));

    updates.push(RegionUpdate::InnerHtml {
        id: regions::RECIPE_SUGGESTIONS.to_owned(),
        html: render_recipe_suggestions(&RECIPE_SUGGESTIONS),
    });

    updates
}

fn meal_title(meal: MealType) -> &'static str {
    match meal {
        MealType::Breakfast => "Breakfast",
        MealType::Lunch => "Lunch",
        MealType::Dinner => "Dinner",
        MealType::Snack => "Snacks",
        MealType::Other => "Other",
    }
}

/// Standalone HTML document with every region filled in
#[must_use]
pub fn render_page(view: &PageView<'_>) -> String {
    let totals = view.totals_view();
    let placeholder = render_meal_plan();

    let meal_slots: String = MealType::PLANNED
        .into_iter()
        .map(|meal| {
            format!(
                r#"
        <div class="col-md-3 meal-slot">
            <h6>{title}</h6>
            <div id="{id}">{placeholder}</div>
        </div>"#,
                title = meal_title(meal),
                id = meal_slot_id(meal),
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Nutrition Tracker</title>
</head>
<body>
<div class="container">
    <input type="text" id="{username_id}" class="form-control" placeholder="Your name" value="{username}">

    <form id="{form_id}">
        <input type="text" id="{search_id}" class="form-control" placeholder="Search foods" value="{query}">
        <button type="submit" class="btn btn-primary">Search</button>
    </form>
    <div id="{results_id}">{results}</div>

    <div class="nutrition-summary">
        <div>Calories: <span id="{cal_id}">{calories}</span></div>
        <div>Protein: <span id="{protein_id}">{protein}</span>g</div>
        <div>Carbs: <span id="{carbs_id}">{carbs}</span>g</div>
        <div>Fat: <span id="{fat_id}">{fat}</span>g</div>
        <div class="progress">
            <div class="progress-bar" id="{progress_id}" role="progressbar" style="width: {progress}%"></div>
        </div>
    </div>

    <div class="row meal-plan">{meal_slots}
    </div>

    <div class="row" id="{recipes_id}">{recipes}</div>
</div>
</body>
</html>
"#,
        username_id = regions::USERNAME,
        username = encode_double_quoted_attribute(view.display_name.unwrap_or_default()),
        form_id = regions::FOOD_FORM,
        search_id = regions::FOOD_SEARCH,
        query = encode_double_quoted_attribute(view.query.unwrap_or_default()),
        results_id = regions::FOOD_RESULTS,
        results = render_search_results(view.results),
        cal_id = regions::TOTAL_CALORIES,
        calories = totals.calories,
        protein_id = regions::TOTAL_PROTEIN,
        protein = totals.protein,
        carbs_id = regions::TOTAL_CARBS,
        carbs = totals.carbs,
        fat_id = regions::TOTAL_FAT,
        fat = totals.fat,
        progress_id = regions::PROGRESS_BAR,
        progress = totals.calorie_progress,
        recipes_id = regions::RECIPE_SUGGESTIONS,
        recipes = render_recipe_suggestions(&RECIPE_SUGGESTIONS),
    )
}
