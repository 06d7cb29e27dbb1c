// ABOUTME: Core domain records for users and their exercise entries
// ABOUTME: Wire-facing projections of these records live in the route modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user of the tracker
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier, minted at creation
    pub id: Uuid,
    /// Name the user registered with
    pub username: String,
}

impl User {
    /// Create a new user with a generated id
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
        }
    }
}

/// A single recorded exercise belonging to a user.
///
/// `user_id` is a weak back-reference: the store does not enforce it
/// referentially, handlers verify the user exists before recording.
#[derive(Debug, Clone)]
pub struct Exercise {
    /// Unique identifier, minted at creation
    pub id: Uuid,
    /// Id of the owning user
    pub user_id: Uuid,
    /// What the exercise was
    pub description: String,
    /// Length of the exercise in minutes
    pub duration: f64,
    /// When the exercise happened
    pub date: DateTime<Utc>,
}

impl Exercise {
    /// Create a new exercise entry with a generated id
    #[must_use]
    pub fn new(
        user_id: Uuid,
        description: impl Into<String>,
        duration: f64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            description: description.into(),
            duration,
            date,
        }
    }
}
