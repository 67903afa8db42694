// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - upstream API access.

pub mod fitness_api;

pub use fitness_api::FitnessApiClient;
