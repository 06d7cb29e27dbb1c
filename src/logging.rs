// ABOUTME: Tracing subscriber setup for the server binary
// ABOUTME: Honors RUST_LOG, defaulting to info-level output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG` when set and defaults to `info` otherwise.
/// Call once, from the binary entry point, before any other work.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
