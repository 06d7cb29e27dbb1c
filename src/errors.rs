// ABOUTME: Application error types and centralized HTTP error formatting
// ABOUTME: Validation failures become 400 plain text; everything else maps to status-coded text bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

/// Body sent when an error carries no message of its own
const DEFAULT_ERROR_BODY: &str = "Internal Server Error";

/// Convenience alias for results carrying an [`AppError`]
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error covering every failure the HTTP surface reports.
///
/// Expected, contract-level failures (unknown user on an otherwise valid
/// request, unsaveable exercise) are *not* errors of this type; they travel
/// as in-band soft errors with HTTP 200. `AppError` is reserved for requests
/// that fail outright.
#[derive(Debug, Error)]
pub enum AppError {
    /// A request field failed validation (HTTP 400, body is the field's message)
    #[error("{message}")]
    Validation {
        /// Name of the offending field
        field: String,
        /// Message reported to the client
        message: String,
    },
    /// Malformed request body or parameters (HTTP 400)
    #[error("{0}")]
    InvalidInput(String),
    /// Requested resource or route does not exist (HTTP 404)
    #[error("{0}")]
    NotFound(String),
    /// Persistence layer failure (HTTP 500)
    #[error("{0}")]
    Database(String),
    /// Invalid or missing configuration at startup
    #[error("{0}")]
    Config(String),
    /// Unexpected internal failure (HTTP 500)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Validation failure for a named field
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Malformed input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Missing resource error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Persistence failure
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database(message.into())
    }

    /// Configuration failure
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Unexpected internal failure
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error maps to
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Config(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    /// The centralized error formatter: every hard failure funnels through
    /// here and leaves as a plain-text body with the mapped status code.
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("request failed: {}", self);
        }

        let message = self.to_string();
        let body = if message.is_empty() {
            DEFAULT_ERROR_BODY.to_owned()
        } else {
            message
        };

        (status, body).into_response()
    }
}
