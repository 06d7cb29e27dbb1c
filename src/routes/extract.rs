// ABOUTME: Request body extractor accepting JSON or urlencoded form payloads
// ABOUTME: Unrecognized content types yield the payload's Default so presence checks stay in handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use crate::errors::AppError;
use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::extract::{FromRequest, Request};
use axum::http::header;
use axum::{Form, Json, RequestExt};
use serde::de::DeserializeOwned;

/// Request body extractor accepting either JSON or urlencoded form bodies.
///
/// Content negotiation follows the `Content-Type` header, matched without
/// regard to case. A body with any other (or no) content type, and an empty
/// body regardless of content type, deserializes as the payload's `Default`,
/// so a bare POST reaches the handler as an empty payload instead of being
/// rejected at the transport layer. Non-empty malformed bodies are a 400.
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let is_json = content_type.starts_with("application/json");
        let is_form = content_type.starts_with("application/x-www-form-urlencoded");
        if !is_json && !is_form {
            return Ok(Self(T::default()));
        }

        // Buffer the body first: an empty body is an empty payload, not a
        // deserialization failure.
        let (parts, body) = req.with_limited_body().into_parts();
        let bytes = to_bytes(body, usize::MAX)
            .await
            .map_err(|e| AppError::invalid_input(format!("Failed to read request body: {e}")))?;
        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }
        let req = Request::from_parts(parts, Body::from(bytes));

        if is_json {
            let Json(payload) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::invalid_input(format!("Invalid JSON body: {e}")))?;
            return Ok(Self(payload));
        }

        let Form(payload) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::invalid_input(format!("Invalid form body: {e}")))?;
        Ok(Self(payload))
    }
}
