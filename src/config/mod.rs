// ABOUTME: Configuration module organization
// ABOUTME: Environment-driven server settings live in environment.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

/// Environment-based server configuration
pub mod environment;
