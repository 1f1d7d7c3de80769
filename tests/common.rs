// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, widget fixtures, and stub HTTP servers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `nutrilog`
//!
//! Stub servers are real axum routers bound to `127.0.0.1:0`, so the HTTP
//! clients are exercised over an actual socket.

use std::sync::{Arc, Once};

use axum::Router;
use nutrilog::{
    models::LogEntry,
    persistence::{InMemoryLogBackend, LogBackend},
    preferences::{MemoryKeyValueStore, PreferenceStore},
    session::NutritionSession,
    widget::NutritionWidget,
};
use tokio::net::TcpListener;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Serve a router on an ephemeral local port and return its base URL
pub async fn spawn_stub(app: Router) -> String {
    init_test_logging();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub server address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Widget over the given backend with an empty in-memory preference store
pub fn widget_over(backend: Arc<dyn LogBackend>) -> NutritionWidget {
    init_test_logging();
    NutritionWidget::new(
        NutritionSession::default(),
        backend,
        PreferenceStore::new(MemoryKeyValueStore::new()),
    )
}

/// In-memory backend pre-loaded with one entry per name
pub fn backend_with(names: &[&str]) -> Arc<InMemoryLogBackend> {
    Arc::new(InMemoryLogBackend::with_entries(
        names.iter().map(|name| LogEntry::named(*name)).collect(),
    ))
}

/// Float comparison for nutrient values
pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}
