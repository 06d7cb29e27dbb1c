// ABOUTME: Main library entry point for the exercise tracker microservice
// ABOUTME: Provides a REST API for users, exercises, and exercise logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

#![deny(unsafe_code)]

//! # Exercise Tracker
//!
//! A small REST service for recording users and their exercise sessions.
//! Clients create users, attach exercises to them, and query per-user
//! exercise logs with optional date range and count filters.
//!
//! ## Features
//!
//! - **User management**: Create users by username and list them all
//! - **Exercise logging**: Attach description, duration, and date to a user
//! - **Log queries**: Per-user history with `from`/`to`/`limit` filters
//! - **Dual body encoding**: POST endpoints accept JSON and form bodies
//! - **Static frontend**: Serves the bundled HTML form and stylesheet
//!
//! ## Quick Start
//!
//! 1. Point `DATABASE_URL` at a `SQLite` database (defaults to a local file)
//! 2. Start the server with the `exercise-tracker` binary
//! 3. POST to `/api/exercise/new-user` and `/api/exercise/add`
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use exercise_tracker::config::environment::ServerConfig;
//! use exercise_tracker::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     // Load configuration
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("Exercise tracker configured with port: HTTP={}",
//!              config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Common data models for users and exercises
pub mod models;

/// Configuration management from environment variables
pub mod config;

/// `SQLite` persistence layer for users and exercises
pub mod database;

/// Unified error handling system with HTTP responses
pub mod errors;

/// `HTTP` routes for user and exercise endpoints
pub mod routes;

/// Production logging and structured output
pub mod logging;
