// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database, user, and exercise creation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(
    dead_code,
    clippy::wildcard_in_or_patterns,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `exercise_tracker`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::env;
use std::sync::Once;

use anyhow::Result;
use chrono::{DateTime, Utc};
use exercise_tracker::database::Database;
use exercise_tracker::models::{Exercise, User};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:").await?;
    Ok(database)
}

/// Create a user directly in the database
pub async fn create_test_user(database: &Database, username: &str) -> Result<User> {
    let user = User::new(username);
    database.create_user(&user).await?;
    Ok(user)
}

/// Create an exercise directly in the database
pub async fn create_test_exercise(
    database: &Database,
    user: &User,
    description: &str,
    duration: f64,
    date: DateTime<Utc>,
) -> Result<Exercise> {
    let exercise = Exercise::new(user.id, description, duration, date);
    database.create_exercise(&exercise).await?;
    Ok(exercise)
}
