// ABOUTME: User record database operations
// ABOUTME: Handles user creation, lookup by id, and the full user listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::User;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

impl Database {
    /// Store a new user record
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the schema's
    /// non-empty username constraint rejects the row.
    pub async fn create_user(&self, user: &User) -> AppResult<Uuid> {
        sqlx::query(
            r"
            INSERT INTO users (id, username)
            VALUES (?1, ?2)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create user: {e}")))?;

        Ok(user.id)
    }

    /// Look up a user by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query(
            r"
            SELECT id, username
            FROM users
            WHERE id = ?1
            ",
        )
        .bind(user_id.to_string())
        .fetch_optional(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to get user: {e}")))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    /// List every user, in the store's natural order.
    ///
    /// No ORDER BY on purpose: callers get rows in the order the store
    /// scans them, which for this append-only table is insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query(
            r"
            SELECT id, username
            FROM users
            ",
        )
        .fetch_all(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to list users: {e}")))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    fn row_to_user(row: &SqliteRow) -> AppResult<User> {
        let id_str: String = row.get("id");
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid user id in database: {e}")))?;

        Ok(User {
            id,
            username: row.get("username"),
        })
    }
}
