// ABOUTME: Main server binary for the exercise tracker microservice
// ABOUTME: Wires configuration, database, and HTTP routes into a running server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Tracker Contributors

//! # Exercise Tracker Server
//!
//! Starts the HTTP server that backs the exercise tracker REST API and
//! serves the bundled frontend from `views/` and `public/`.
//!
//! ## Usage
//!
//! ```bash
//! # Run with defaults (port 3000, local SQLite file)
//! cargo run --bin exercise-tracker
//!
//! # Override the port and database
//! PORT=8080 DATABASE_URL=sqlite:./data/tracker.db cargo run --bin exercise-tracker
//! ```

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use exercise_tracker::config::environment::ServerConfig;
use exercise_tracker::database::Database;
use exercise_tracker::logging;
use exercise_tracker::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let config = ServerConfig::from_env()?;
    info!(
        "Starting exercise tracker v{} on port {}",
        env!("CARGO_PKG_VERSION"),
        config.http_port
    );

    let database = Database::new(&config.database_url).await?;
    let app = routes::router(database);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr).await?;
    info!("Your app is listening on port {}", addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}
