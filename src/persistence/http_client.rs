// ABOUTME: reqwest-based client for the food log backend
// ABOUTME: POST /api/log-food, GET /api/get-logs, and GET/POST /api/nutrition-goals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use chrono::NaiveDate;
use nutrilog_core::constants::endpoints;
use nutrilog_core::errors::{AppError, AppResult};
use nutrilog_core::models::{LogEntry, NewLogEntry, NutritionGoals};
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::LogBackend;

const SERVICE_NAME: &str = "nutrition backend";

/// Write acknowledgement returned by the backend
#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
}

/// The log endpoint answers either with a bare array or with an envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LogsPayload {
    Entries(Vec<LogEntry>),
    Envelope {
        status: String,
        #[serde(default)]
        data: Vec<LogEntry>,
        #[serde(default)]
        message: Option<String>,
    },
}

impl LogsPayload {
    fn into_entries(self) -> AppResult<Vec<LogEntry>> {
        match self {
            Self::Entries(entries) => Ok(entries),
            Self::Envelope { status, data, .. } if status == endpoints::STATUS_SUCCESS => Ok(data),
            Self::Envelope {
                status, message, ..
            } => Err(AppError::external_service(
                SERVICE_NAME,
                format!(
                    "get-logs returned status '{status}': {}",
                    message.unwrap_or_default()
                ),
            )
            .with_resource_id(endpoints::GET_LOGS)),
        }
    }
}

/// HTTP implementation of [`LogBackend`]
///
/// No timeout is configured on the default client; a call waits for the
/// backend to answer or the connection to fail.
#[derive(Debug, Clone)]
pub struct HttpLogClient {
    base_url: String,
    http_client: Client,
}

impl HttpLogClient {
    /// Create a client for a backend root such as `http://127.0.0.1:5000`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`
    pub fn with_client(base_url: impl Into<String>, http_client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            base_url,
            http_client,
        }
    }

    /// Backend root this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport_error(path: &str, error: &reqwest::Error) -> AppError {
        AppError::external_service(SERVICE_NAME, error.to_string()).with_resource_id(path)
    }

    async fn require_success(path: &str, response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(
            AppError::external_service(SERVICE_NAME, format!("HTTP {status}: {body}"))
                .with_resource_id(path)
                .with_details(json!({ "http_status": status.as_u16() })),
        )
    }

    // The acknowledgement body decides success, whatever the HTTP status.
    async fn require_ack(path: &str, response: Response) -> AppResult<()> {
        let http_status = response.status();
        let ack: StatusResponse = response.json().await.map_err(|e| {
            AppError::serialization(format!(
                "Unexpected {path} response (HTTP {http_status}): {e}"
            ))
            .with_resource_id(path)
        })?;

        if ack.status != endpoints::STATUS_SUCCESS {
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("{path} returned status '{}'", ack.status),
            )
            .with_resource_id(path)
            .with_details(json!({
                "http_status": http_status.as_u16(),
                "message": ack.message,
            })));
        }
        Ok(())
    }
}

#[async_trait]
impl LogBackend for HttpLogClient {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn append_entry(&self, entry: &NewLogEntry) -> AppResult<()> {
        let path = endpoints::LOG_FOOD;
        let response = self
            .http_client
            .post(self.endpoint(path))
            .json(entry)
            .send()
            .await
            .map_err(|e| Self::transport_error(path, &e))?;

        Self::require_ack(path, response).await?;

        debug!(food = %entry.food_name, calories = entry.calories, "Log entry appended");
        Ok(())
    }

    async fn fetch_entries_for(&self, date: Option<NaiveDate>) -> AppResult<Vec<LogEntry>> {
        let path = endpoints::GET_LOGS;
        let mut request = self.http_client.get(self.endpoint(path));
        if let Some(date) = date {
            request = request.query(&[("date", date.format("%Y-%m-%d").to_string())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::transport_error(path, &e))?;
        let response = Self::require_success(path, response).await?;

        let payload: LogsPayload = response.json().await.map_err(|e| {
            AppError::serialization(format!("Unexpected get-logs response: {e}"))
                .with_resource_id(path)
        })?;
        let entries = payload.into_entries()?;

        debug!(count = entries.len(), "Log entries fetched");
        Ok(entries)
    }

    async fn fetch_goals(&self) -> AppResult<NutritionGoals> {
        let path = endpoints::NUTRITION_GOALS;
        let response = self
            .http_client
            .get(self.endpoint(path))
            .send()
            .await
            .map_err(|e| Self::transport_error(path, &e))?;
        let response = Self::require_success(path, response).await?;

        response.json().await.map_err(|e| {
            AppError::serialization(format!("Unexpected nutrition-goals response: {e}"))
                .with_resource_id(path)
        })
    }

    async fn update_goals(&self, goals: &NutritionGoals) -> AppResult<()> {
        let path = endpoints::NUTRITION_GOALS;
        let response = self
            .http_client
            .post(self.endpoint(path))
            .json(goals)
            .send()
            .await
            .map_err(|e| Self::transport_error(path, &e))?;
        Self::require_ack(path, response).await?;

        debug!(calories = goals.calories, "Nutrition goals saved");
        Ok(())
    }
}
