// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Suggested workout.

use super::{lenient, non_empty, RecordIds};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Workout {
    #[serde(flatten)]
    pub ids: RecordIds,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Option<String>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<f64>,
}

impl Workout {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }
}
