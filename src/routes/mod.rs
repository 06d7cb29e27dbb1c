// ABOUTME: Route module organization and full application router assembly
// ABOUTME: Combines API routes with static assets, the 404 fallback, tracing, and CORS
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! Route modules for the exercise tracker
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the database layer. [`router`] assembles them into the
//! complete application, including the static surface and the catch-all 404.

/// Exercise recording and log routes
pub mod exercises;
/// JSON-or-form request body extraction
pub mod extract;
/// In-band soft-error envelope
pub mod outcome;
/// User registration and listing routes
pub mod users;

pub use exercises::{ExerciseResponse, ExerciseRoutes, LogEntry, LogResponse};
pub use extract::JsonOrForm;
pub use outcome::{ApiOutcome, SoftError};
pub use users::{UserResponse, UserRoutes};

use crate::database::Database;
use crate::errors::AppError;
use axum::handler::HandlerWithoutStateExt;
use axum::routing::get_service;
use axum::Router;
use std::future::{ready, Ready};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

/// Directory served for any path the API does not claim
const PUBLIC_DIR: &str = "public";
/// Page served at the root path
const INDEX_PAGE: &str = "views/index.html";
/// Body of the catch-all 404 response
const PAGE_NOT_FOUND: &str = "Page not found :(";

/// Shared responder behind every unclaimed path and method.
///
/// A matched path with the wrong verb answers exactly like an unknown path,
/// so this hangs off each route's method fallback as well as the final
/// catch-all.
pub(crate) fn page_not_found() -> Ready<AppError> {
    ready(AppError::not_found(PAGE_NOT_FOUND))
}

/// Assemble the complete application router.
///
/// API routes come first, then the static entry page at `/`, then the public
/// asset directory for anything unmatched, and finally the catch-all 404.
/// The whole stack is wrapped in request tracing and permissive CORS.
pub fn router(database: Database) -> Router {
    // Non-GET requests to static paths fall through to the 404 page instead
    // of a bare 405.
    let assets = ServeDir::new(PUBLIC_DIR)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(page_not_found.into_service());

    Router::new()
        .merge(UserRoutes::router(database.clone()))
        .merge(ExerciseRoutes::router(database))
        .route(
            "/",
            get_service(ServeFile::new(INDEX_PAGE)).fallback(page_not_found),
        )
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
