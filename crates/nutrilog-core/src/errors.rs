// ABOUTME: Unified error types shared by every nutrilog component
// ABOUTME: ErrorCode taxonomy, AppError with context, and conversions from library errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible nutrilog operation returns [`AppResult`]. Catalog misses are
//! not errors (they are `None`); everything that crosses a process boundary
//! (backend calls, the USDA API, the preference file) reports an [`AppError`]
//! so the caller decides whether to surface it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller-supplied data was rejected (catalog entries, goals)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,

    // Resource Management (4000-4999)
    /// A named resource does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // External Services (5000-5999)
    /// The log backend or USDA API failed or answered with an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,

    // Configuration (6000-6999)
    /// A configuration value failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected failure inside the process
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Local file storage failed
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// A payload could not be encoded or decoded
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Resource the error refers to (endpoint, file path, food name)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Storage (local file) error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// Serialization or response-shape error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{}: {}", service.into(), message.into()),
        )
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => Self::new(ErrorCode::InternalError, error.to_string())
                .with_details(serde_json::json!({
                    "source": source.to_string()
                })),
            None => Self::new(ErrorCode::InternalError, error.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}
