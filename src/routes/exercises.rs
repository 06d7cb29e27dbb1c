// ABOUTME: Route handlers for recording exercises and fetching user logs
// ABOUTME: Expected failures travel as in-band soft errors with HTTP 200
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use crate::database::{Database, LogFilter};
use crate::models::{Exercise, User};
use crate::routes::extract::JsonOrForm;
use crate::routes::outcome::ApiOutcome;
use crate::routes::page_not_found;
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

/// Soft-error message when a required add-exercise field is absent
const MISSING_VALUES: &str = "Some required values were not specified.";
/// Soft-error message when the add-exercise user does not exist
const USER_ID_NOT_FOUND: &str = "User ID not found.";
/// Soft-error message when the exercise cannot be persisted
const EXERCISE_NOT_SAVED: &str = "Exercise could not be saved.";
/// Soft-error message when the log request lacks a user id
const USER_ID_REQUIRED: &str = "userId is required.";
/// Soft-error message when the log user does not exist
const USER_NOT_FOUND: &str = "User not found.";
/// Soft-error message when the log query fails
const COULD_NOT_GET_EXERCISES: &str = "Could not get exercises.";

/// Duration value as submitted by the client.
///
/// Form bodies always deliver strings; JSON bodies may deliver numbers.
/// Parsing to minutes happens at save time, after the presence check.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    /// Numeric JSON value
    Number(f64),
    /// String value from a form body or quoted JSON
    Text(String),
}

impl DurationInput {
    /// Whether a value was actually supplied; empty strings count as absent
    fn is_present(&self) -> bool {
        match self {
            Self::Number(_) => true,
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Parse to minutes, `None` when the value is not numeric
    fn as_minutes(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Body accepted by the add endpoint (JSON or form encoded).
///
/// Every field is optional at the deserialization layer; the handler checks
/// presence and reports the contract's soft errors itself.
#[derive(Debug, Default, Deserialize)]
pub struct AddExercisePayload {
    /// Id of the user the exercise belongs to
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    /// What the exercise was
    #[serde(default)]
    pub description: Option<String>,
    /// Duration in minutes, as a number or numeric string
    #[serde(default)]
    pub duration: Option<DurationInput>,
    /// Optional date; absent and unparsable values resolve to now
    #[serde(default)]
    pub date: Option<String>,
}

/// Query parameters accepted by the log endpoint
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    /// Id of the user whose log to fetch
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    /// Inclusive lower date bound
    #[serde(default)]
    pub from: Option<String>,
    /// Inclusive upper date bound
    #[serde(default)]
    pub to: Option<String>,
    /// Maximum number of entries; zero and non-numeric values mean unlimited
    #[serde(default)]
    pub limit: Option<String>,
}

/// Response for a successfully recorded exercise: the stored entry joined
/// with the owning user's name. The user id itself is not echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    /// Unique exercise identifier
    pub id: Uuid,
    /// What the exercise was
    pub description: String,
    /// Duration in minutes
    pub duration: f64,
    /// When the exercise happened
    pub date: DateTime<Utc>,
    /// Name of the owning user
    pub username: String,
}

impl ExerciseResponse {
    fn new(exercise: Exercise, username: String) -> Self {
        Self {
            id: exercise.id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            username,
        }
    }
}

/// A single entry in a user's log; the owner id and store internals are
/// projected out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique exercise identifier
    pub id: Uuid,
    /// What the exercise was
    pub description: String,
    /// Duration in minutes
    pub duration: f64,
    /// When the exercise happened
    pub date: DateTime<Utc>,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            id: exercise.id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        }
    }
}

/// Response for the log endpoint: the user projection augmented with the
/// filtered entries and their count
#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// Name the user registered with
    pub username: String,
    /// Matching exercises in the store's natural order
    pub log: Vec<LogEntry>,
    /// Number of entries in `log`, after filtering
    pub count: usize,
}

impl LogResponse {
    fn new(user: User, exercises: Vec<Exercise>) -> Self {
        let log: Vec<LogEntry> = exercises.into_iter().map(LogEntry::from).collect();
        Self {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}

/// Exercise routes configuration
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create the exercise router
    ///
    /// Wrong-method requests on these paths answer with the catch-all 404
    /// instead of a bare 405.
    ///
    /// # Endpoints
    ///
    /// - `POST /api/exercise/add` - Record an exercise for a user
    /// - `GET /api/exercise/log` - Fetch a user's exercise log
    pub fn router(database: Database) -> Router {
        Router::new()
            .route(
                "/api/exercise/add",
                post(Self::handle_add).fallback(page_not_found),
            )
            .route(
                "/api/exercise/log",
                get(Self::handle_log).fallback(page_not_found),
            )
            .with_state(database)
    }

    /// Handle POST /api/exercise/add - Record an exercise
    ///
    /// Field presence, user existence, and save failures all surface as
    /// in-band soft errors with HTTP 200.
    async fn handle_add(
        State(database): State<Database>,
        JsonOrForm(payload): JsonOrForm<AddExercisePayload>,
    ) -> ApiOutcome<ExerciseResponse> {
        let user_id_raw = payload.user_id.unwrap_or_default();
        let description = payload.description.unwrap_or_default();
        let duration_input = match payload.duration {
            Some(input) if input.is_present() => input,
            _ => return ApiOutcome::SoftError(MISSING_VALUES),
        };
        if user_id_raw.is_empty() || description.is_empty() {
            return ApiOutcome::SoftError(MISSING_VALUES);
        }

        // Absent and unparsable dates both resolve to the current time
        let date = resolve_date(payload.date.as_deref());

        let Some(user) = Self::lookup_user(&database, &user_id_raw).await else {
            return ApiOutcome::SoftError(USER_ID_NOT_FOUND);
        };

        let Some(duration) = duration_input.as_minutes() else {
            return ApiOutcome::SoftError(EXERCISE_NOT_SAVED);
        };

        let exercise = Exercise::new(user.id, description, duration, date);
        if let Err(e) = database.create_exercise(&exercise).await {
            warn!("Failed to save exercise for user {}: {e}", user.id);
            return ApiOutcome::SoftError(EXERCISE_NOT_SAVED);
        }

        info!("Recorded exercise {} for user {}", exercise.id, user.id);

        ApiOutcome::Success(ExerciseResponse::new(exercise, user.username))
    }

    /// Handle GET /api/exercise/log - Fetch a user's exercise log
    ///
    /// Optional `from`/`to` bounds are inclusive; `limit` caps the result
    /// only when it parses to a positive integer. Failures surface as
    /// in-band soft errors with HTTP 200.
    async fn handle_log(
        State(database): State<Database>,
        Query(query): Query<LogQuery>,
    ) -> ApiOutcome<LogResponse> {
        let LogQuery {
            user_id,
            from,
            to,
            limit,
        } = query;

        let user_id_raw = user_id.unwrap_or_default();
        if user_id_raw.is_empty() {
            return ApiOutcome::SoftError(USER_ID_REQUIRED);
        }

        let Some(user) = Self::lookup_user(&database, &user_id_raw).await else {
            return ApiOutcome::SoftError(USER_NOT_FOUND);
        };

        // A bound that is present but unparsable fails the whole query
        let Some(filter) = build_log_filter(from.as_deref(), to.as_deref(), limit.as_deref())
        else {
            return ApiOutcome::SoftError(COULD_NOT_GET_EXERCISES);
        };

        let exercises = match database.exercises_for_user(user.id, &filter).await {
            Ok(found) => found,
            Err(e) => {
                warn!("Failed to fetch exercises for user {}: {e}", user.id);
                return ApiOutcome::SoftError(COULD_NOT_GET_EXERCISES);
            }
        };

        ApiOutcome::Success(LogResponse::new(user, exercises))
    }

    /// Find a user by raw id text. Malformed ids and lookup failures fold
    /// into `None`: callers cannot distinguish them from an unknown user.
    async fn lookup_user(database: &Database, raw_id: &str) -> Option<User> {
        let user_id = Uuid::parse_str(raw_id).ok()?;
        match database.get_user(user_id).await {
            Ok(found) => found,
            Err(e) => {
                warn!("User lookup failed: {e}");
                None
            }
        }
    }
}

/// Build the log filter from raw query values.
///
/// Empty-string values are treated as absent. Returns `None` when a supplied
/// date bound does not parse.
fn build_log_filter(
    from: Option<&str>,
    to: Option<&str>,
    limit: Option<&str>,
) -> Option<LogFilter> {
    let from = parse_optional_bound(from)?;
    let to = parse_optional_bound(to)?;

    Some(LogFilter {
        from,
        to,
        limit: parse_limit(limit),
    })
}

/// Parse an optional date bound. Absent and empty values are `Some(None)`;
/// a present value that does not parse is `None`.
fn parse_optional_bound(raw: Option<&str>) -> Option<Option<DateTime<Utc>>> {
    raw.filter(|value| !value.is_empty())
        .map_or(Some(None), |text| parse_date(text).map(Some))
}

/// Parse the limit parameter. Zero, negative, and non-numeric values all
/// mean "no limit".
fn parse_limit(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|parsed| *parsed > 0)
}

/// Resolve the submitted date to a concrete timestamp. Absent and
/// unparsable values both fall back to the current time.
fn resolve_date(raw: Option<&str>) -> DateTime<Utc> {
    raw.filter(|value| !value.is_empty())
        .and_then(parse_date)
        .unwrap_or_else(Utc::now)
}

/// Parse a client-supplied date: full RFC 3339 timestamps or bare
/// `YYYY-MM-DD` calendar dates, the latter read as midnight UTC.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
