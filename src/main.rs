// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit Tracker web front-end server.

use octofit_web::{config::Config, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, "Starting OctoFit web front-end");

    if config.codespace_name.is_none() && config.api_url_override.is_none() {
        tracing::warn!("Neither CODESPACE_NAME nor OCTOFIT_API_URL is set; every view will fail to fetch");
    }

    let state = Arc::new(AppState::new(config.clone()));
    tracing::info!(api = %state.api.base_url(), "Fitness API configured");

    if state.logo_available {
        tracing::info!(path = %config.logo_path().display(), "Logo found");
    } else {
        tracing::warn!(path = %config.logo_path().display(), "Logo not found, shell renders without it");
    }

    // Build router
    let app = octofit_web::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("octofit_web=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
