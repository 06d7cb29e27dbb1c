// ABOUTME: Database connection handling and schema setup for the exercise store
// ABOUTME: Per-resource query implementations live in users.rs and exercises.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

/// Exercise entry storage and filtered log queries
pub mod exercises;
/// User record storage
pub mod users;

pub use exercises::LogFilter;

use crate::errors::{AppError, AppResult};
use sqlx::{Pool, Sqlite, SqlitePool};
use tracing::info;

/// Database connection pool handle.
///
/// Cloning is cheap (the pool is reference-counted), which is how the handle
/// travels into router state instead of living in a global.
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and prepare the schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database URL is invalid or malformed
    /// - Database connection fails
    /// - `SQLite` file creation fails
    /// - Schema setup fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

        let db = Self { pool };
        db.setup_schema().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Create tables and indexes if they do not exist yet.
    ///
    /// Presence of every exercise field is enforced here with NOT NULL;
    /// `exercises.user_id` deliberately carries no foreign key, it is a weak
    /// back-reference checked by the handlers instead.
    async fn setup_schema(&self) -> AppResult<()> {
        info!("Preparing database schema...");

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL CHECK (length(username) > 0)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create users table: {e}")))?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                description TEXT NOT NULL,
                duration REAL NOT NULL,
                date TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercises table: {e}")))?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_exercises_user_id ON exercises (user_id)")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create exercises index: {e}")))?;

        info!("Database schema ready");
        Ok(())
    }
}
