// ABOUTME: In-band outcome envelope for handlers with contract-level failures
// ABOUTME: Success and soft error both serialize with HTTP 200; soft errors carry an error field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Body shape for in-band failures: a lone `error` field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftError {
    /// Human-readable failure message
    pub error: String,
}

/// Outcome of a handler whose failures are part of the API contract.
///
/// Both variants serialize with HTTP 200: clients detect failure by the
/// presence of an `error` field in the body, not by the status code. Hard
/// failures (validation, unmatched routes, malformed bodies) do not use this
/// type; they travel as [`AppError`](crate::errors::AppError) instead.
#[derive(Debug)]
pub enum ApiOutcome<T> {
    /// Successful payload, serialized as-is
    Success(T),
    /// Expected failure, serialized as `{"error": message}`
    SoftError(&'static str),
}

impl<T: Serialize> IntoResponse for ApiOutcome<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Success(payload) => (StatusCode::OK, Json(payload)).into_response(),
            Self::SoftError(message) => (
                StatusCode::OK,
                Json(SoftError {
                    error: message.to_owned(),
                }),
            )
                .into_response(),
        }
    }
}
