// ABOUTME: Environment-only server configuration loaded once at startup
// ABOUTME: Reads PORT and DATABASE_URL with local-development defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use crate::errors::{AppError, AppResult};
use std::env;

/// Port used when `PORT` is not set
const DEFAULT_HTTP_PORT: u16 = 3000;

/// Connection string used when `DATABASE_URL` is not set
const DEFAULT_DATABASE_URL: &str = "sqlite:exercise-tracker.db";

/// Server configuration, resolved from the environment once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the HTTP server binds to
    pub http_port: u16,
    /// Database connection string
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// `PORT` falls back to 3000 when unset or empty; `DATABASE_URL` falls
    /// back to a local `SQLite` file next to the binary.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `PORT` is set to something that is
    /// not a valid TCP port number.
    pub fn from_env() -> AppResult<Self> {
        let http_port = match env::var("PORT") {
            Ok(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .map_err(|e| AppError::config(format!("Invalid PORT value `{raw}`: {e}")))?,
            _ => DEFAULT_HTTP_PORT,
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        Ok(Self {
            http_port,
            database_url,
        })
    }
}
