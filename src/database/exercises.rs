// ABOUTME: Exercise entry database operations
// ABOUTME: Insertion plus the filtered log query behind GET /api/exercise/log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use super::Database;
use crate::errors::{AppError, AppResult};
use crate::models::Exercise;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};
use uuid::Uuid;

/// Filters applied when fetching a user's exercise log.
///
/// Both date bounds are inclusive. Dates are stored as RFC 3339 text with a
/// fixed UTC offset, so the store's text comparison is chronological.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFilter {
    /// Keep entries dated at or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Keep entries dated at or before this instant
    pub to: Option<DateTime<Utc>>,
    /// Cap the number of returned entries; `None` means unlimited
    pub limit: Option<i64>,
}

impl Database {
    /// Store a new exercise entry
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create_exercise(&self, exercise: &Exercise) -> AppResult<Uuid> {
        sqlx::query(
            r"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(exercise.id.to_string())
        .bind(exercise.user_id.to_string())
        .bind(&exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date.to_rfc3339())
        .execute(self.pool())
        .await
        .map_err(|e| AppError::database(format!("Failed to create exercise: {e}")))?;

        Ok(exercise.id)
    }

    /// Fetch a user's exercises, applying the given filter.
    ///
    /// Rows come back in the store's natural order (insertion order for this
    /// append-only table); no ORDER BY is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub async fn exercises_for_user(
        &self,
        user_id: Uuid,
        filter: &LogFilter,
    ) -> AppResult<Vec<Exercise>> {
        let mut builder: QueryBuilder<'_, Sqlite> = QueryBuilder::new(
            "SELECT id, user_id, description, duration, date FROM exercises WHERE user_id = ",
        );
        builder.push_bind(user_id.to_string());

        if let Some(from) = filter.from {
            builder.push(" AND date >= ");
            builder.push_bind(from.to_rfc3339());
        }
        if let Some(to) = filter.to {
            builder.push(" AND date <= ");
            builder.push_bind(to.to_rfc3339());
        }
        if let Some(limit) = filter.limit {
            builder.push(" LIMIT ");
            builder.push_bind(limit);
        }

        let rows = builder
            .build()
            .fetch_all(self.pool())
            .await
            .map_err(|e| AppError::database(format!("Failed to get exercises: {e}")))?;

        rows.iter().map(Self::row_to_exercise).collect()
    }

    fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
        let id_str: String = row.get("id");
        let id = Uuid::parse_str(&id_str)
            .map_err(|e| AppError::internal(format!("Invalid exercise id in database: {e}")))?;

        let user_id_str: String = row.get("user_id");
        let user_id = Uuid::parse_str(&user_id_str)
            .map_err(|e| AppError::internal(format!("Invalid user id in database: {e}")))?;

        let date_str: String = row.get("date");
        let date = DateTime::parse_from_rfc3339(&date_str)
            .map_err(|e| AppError::internal(format!("Invalid exercise date in database: {e}")))?
            .with_timezone(&Utc);

        Ok(Exercise {
            id,
            user_id,
            description: row.get("description"),
            duration: row.get("duration"),
            date,
        })
    }
}
