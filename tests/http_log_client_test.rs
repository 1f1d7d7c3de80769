// ABOUTME: Integration tests for the HTTP log client against a stub backend
// ABOUTME: Exercises log-food, get-logs, and nutrition-goals over a real socket
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::unwrap_used, missing_docs)]

mod common;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use common::{approx, spawn_stub, widget_over};
use nutrilog::{
    errors::ErrorCode,
    models::{MealType, NewLogEntry, NutritionGoals},
    persistence::{HttpLogClient, LogBackend},
    widget::AddOutcome,
};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Recorded {
    posts: Arc<Mutex<Vec<Value>>>,
    queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn log_food_ok(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Json<Value> {
    recorded.posts.lock().unwrap().push(body);
    Json(json!({ "status": "success", "message": "Food logged successfully" }))
}

async fn logs_envelope(
    State(recorded): State<Recorded>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    recorded.queries.lock().unwrap().push(params);
    Json(json!({
        "status": "success",
        "data": [
            {
                "id": 1,
                "food_name": "apple",
                "calories": 95.0,
                "serving_size": 1.0,
                "protein": 0.5,
                "carbs": 25.0,
                "fat": 0.3,
                "meal_type": "breakfast",
                "date": "2025-03-04 08:00:00"
            },
            { "id": 2, "food_name": "Banana", "calories": 105.0, "meal_type": "snacks" }
        ]
    }))
}

async fn stub_with_envelope() -> (String, Recorded) {
    let recorded = Recorded::default();
    let app = Router::new()
        .route("/api/log-food", post(log_food_ok))
        .route("/api/get-logs", get(logs_envelope))
        .with_state(recorded.clone());
    (spawn_stub(app).await, recorded)
}

#[tokio::test]
async fn test_append_posts_name_and_calories() {
    let (base_url, recorded) = stub_with_envelope().await;
    let client = HttpLogClient::new(format!("{base_url}/"));

    client
        .append_entry(&NewLogEntry::new("apple", 95.0))
        .await
        .unwrap();
    client
        .append_entry(&NewLogEntry::new("rice", 130.0).with_meal_type(MealType::Lunch))
        .await
        .unwrap();

    let posts = recorded.posts.lock().unwrap().clone();
    assert_eq!(posts[0], json!({ "food_name": "apple", "calories": 95.0 }));
    assert_eq!(posts[1]["meal_type"], "lunch");
}

#[tokio::test]
async fn test_fetch_accepts_envelope_and_forwards_date() {
    let (base_url, recorded) = stub_with_envelope().await;
    let client = HttpLogClient::new(base_url);

    let entries = client.fetch_entries().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].food_name, "apple");
    assert_eq!(entries[0].meal_type, Some(MealType::Breakfast));
    assert_eq!(entries[1].meal_type, Some(MealType::Snack));

    let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
    client.fetch_entries_for(Some(day)).await.unwrap();

    let queries = recorded.queries.lock().unwrap().clone();
    assert!(queries[0].is_empty());
    assert_eq!(queries[1].get("date").map(String::as_str), Some("2025-03-04"));
}

#[tokio::test]
async fn test_fetch_accepts_bare_array() {
    let app = Router::new().route(
        "/api/get-logs",
        get(|| async { Json(json!([{ "food_name": "rice" }, { "food_name": "rice" }])) }),
    );
    let client = HttpLogClient::new(spawn_stub(app).await);

    let entries = client.fetch_entries().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.food_name == "rice"));
}

#[tokio::test]
async fn test_append_rejected_by_status_field() {
    let app = Router::new().route(
        "/api/log-food",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "message": "database is locked" })),
            )
        }),
    );
    let client = HttpLogClient::new(spawn_stub(app).await);

    let err = client
        .append_entry(&NewLogEntry::new("apple", 95.0))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_append_success_body_wins_over_http_status() {
    let app = Router::new().route(
        "/api/log-food",
        post(|| async { (StatusCode::ACCEPTED, Json(json!({ "status": "success" }))) }),
    );
    let client = HttpLogClient::new(spawn_stub(app).await);

    assert!(client
        .append_entry(&NewLogEntry::new("apple", 95.0))
        .await
        .is_ok());
}

#[tokio::test]
async fn test_fetch_server_error_and_malformed_body() {
    let app = Router::new()
        .route(
            "/api/get-logs",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/api/nutrition-goals",
            get(|| async { Json(json!({ "calories": "plenty" })) }),
        );
    let client = HttpLogClient::new(spawn_stub(app).await);

    let err = client.fetch_entries().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);

    let err = client.fetch_goals().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
}

#[tokio::test]
async fn test_envelope_error_status_is_an_error() {
    let app = Router::new().route(
        "/api/get-logs",
        get(|| async { Json(json!({ "status": "error", "message": "no such table" })) }),
    );
    let client = HttpLogClient::new(spawn_stub(app).await);

    let err = client.fetch_entries().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert!(err.message.contains("no such table"));
}

#[tokio::test]
async fn test_unreachable_backend_is_external_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpLogClient::new(format!("http://{addr}"));
    let err = client.fetch_entries().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_goals_use_defaults_for_missing_fields() {
    let app = Router::new().route(
        "/api/nutrition-goals",
        get(|| async { Json(json!({ "calories": 1800 })) }),
    );
    let client = HttpLogClient::new(spawn_stub(app).await);

    let goals = client.fetch_goals().await.unwrap();
    assert!(approx(goals.calories, 1800.0));
    assert!(approx(goals.protein, 50.0));
    assert!(approx(goals.carbs, 250.0));
    assert!(approx(goals.fat, 70.0));
}

#[tokio::test]
async fn test_widget_over_http_backend() {
    let (base_url, recorded) = stub_with_envelope().await;
    let mut widget = widget_over(Arc::new(HttpLogClient::new(base_url)));

    let summary = widget.load().await.unwrap();
    assert_eq!(summary.applied, 2);
    assert!(approx(widget.totals().calories, 200.0));

    let outcome = widget.add_food("Chicken Breast").await;
    assert!(matches!(outcome, AddOutcome::Logged { persisted: true, .. }));
    assert!(approx(widget.totals().calories, 365.0));

    let posts = recorded.posts.lock().unwrap().clone();
    assert_eq!(posts, vec![json!({ "food_name": "Chicken Breast", "calories": 165.0 })]);
}

#[tokio::test]
async fn test_update_goals_posts_all_targets() {
    let recorded = Recorded::default();
    let app = Router::new()
        .route(
            "/api/nutrition-goals",
            post(|State(recorded): State<Recorded>, Json(body): Json<Value>| async move {
                recorded.posts.lock().unwrap().push(body);
                Json(json!({ "status": "success" }))
            }),
        )
        .with_state(recorded.clone());
    let client = HttpLogClient::new(spawn_stub(app).await);

    let goals = NutritionGoals {
        calories: 1800.0,
        protein: 90.0,
        ..NutritionGoals::default()
    };
    client.update_goals(&goals).await.unwrap();

    let posts = recorded.posts.lock().unwrap().clone();
    assert_eq!(
        posts,
        vec![json!({ "calories": 1800.0, "protein": 90.0, "carbs": 250.0, "fat": 70.0 })]
    );
}

#[tokio::test]
async fn test_update_goals_error_status_keeps_widget_goals() {
    let app = Router::new().route(
        "/api/nutrition-goals",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "status": "error", "message": "login required" })),
            )
        }),
    );
    let mut widget = widget_over(Arc::new(HttpLogClient::new(spawn_stub(app).await)));

    let err = widget
        .update_goals(NutritionGoals {
            calories: 1200.0,
            ..NutritionGoals::default()
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ExternalServiceError);
    assert_eq!(
        err.context.resource_id.as_deref(),
        Some("/api/nutrition-goals")
    );
    assert!(approx(widget.goals().calories, 2000.0));
}
