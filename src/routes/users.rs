// ABOUTME: Route handlers for user registration and the user listing
// ABOUTME: Missing usernames fail validation and surface as HTTP 400 plain text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use crate::routes::extract::JsonOrForm;
use crate::routes::page_not_found;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// Validation message for a missing or empty username
const USERNAME_REQUIRED: &str = "Path `username` is required.";

/// Payload for creating a user (JSON or form encoded)
#[derive(Debug, Default, Deserialize)]
pub struct NewUserPayload {
    /// Requested username; presence is checked by the handler
    #[serde(default)]
    pub username: Option<String>,
}

/// Wire projection of a user: id and username only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// Name the user registered with
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// User routes configuration
pub struct UserRoutes;

impl UserRoutes {
    /// Create the user router
    ///
    /// Wrong-method requests on these paths answer with the catch-all 404
    /// instead of a bare 405.
    ///
    /// # Endpoints
    ///
    /// - `POST /api/exercise/new-user` - Register a new user
    /// - `GET /api/exercise/users` - List all users
    pub fn router(database: Database) -> Router {
        Router::new()
            .route(
                "/api/exercise/new-user",
                post(Self::handle_new_user).fallback(page_not_found),
            )
            .route(
                "/api/exercise/users",
                get(Self::handle_list_users).fallback(page_not_found),
            )
            .with_state(database)
    }

    /// Handle POST /api/exercise/new-user - Register a new user
    ///
    /// An absent or empty username is a validation failure and leaves as
    /// HTTP 400 through the centralized error formatter.
    async fn handle_new_user(
        State(database): State<Database>,
        JsonOrForm(payload): JsonOrForm<NewUserPayload>,
    ) -> AppResult<Response> {
        let username = payload.username.unwrap_or_default();
        if username.is_empty() {
            return Err(AppError::validation("username", USERNAME_REQUIRED));
        }

        let user = User::new(username);
        database.create_user(&user).await?;

        info!("Created user {} ({})", user.username, user.id);

        Ok((StatusCode::OK, Json(UserResponse::from(user))).into_response())
    }

    /// Handle GET /api/exercise/users - List all users in natural order
    async fn handle_list_users(State(database): State<Database>) -> AppResult<Response> {
        let users = database.list_users().await?;
        let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
