// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OctoFit Tracker web front-end
//!
//! Serves the OctoFit navigation shell and renders users, teams,
//! activities, workouts and the leaderboard as HTML tables, fetching each
//! view's records from the OctoFit REST API on every page load.

pub mod config;
pub mod error;
pub mod format;
pub mod middleware;
pub mod models;
pub mod resource;
pub mod routes;
pub mod services;
pub mod views;

use config::Config;
use services::FitnessApiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub api: FitnessApiClient,
    /// Logo asset present in the static directory at startup
    pub logo_available: bool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api = FitnessApiClient::new(config.api_base_url());
        let logo_available = config.logo_path().is_file();
        Self {
            config,
            api,
            logo_available,
        }
    }
}
