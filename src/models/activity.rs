// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Logged fitness activity.

use super::{lenient, non_empty, RecordIds, Scalar};
use serde::Deserialize;

/// A single logged activity.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Activity {
    #[serde(flatten)]
    pub ids: RecordIds,
    /// Display name of the owner, when the API denormalizes it
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    /// Owner reference (id or name)
    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<Scalar>,
    /// Running, cycling, swimming, ...
    #[serde(default, deserialize_with = "lenient")]
    pub activity_type: Option<String>,
    /// Duration in minutes
    #[serde(default, deserialize_with = "lenient")]
    pub duration: Option<f64>,
    /// Calendar date (`YYYY-MM-DD`)
    #[serde(default, deserialize_with = "lenient")]
    pub date: Option<String>,
}

impl Activity {
    /// Who did it: `username`, falling back to the `user` reference.
    pub fn owner(&self) -> Option<String> {
        non_empty(&self.username)
            .map(str::to_string)
            .or_else(|| self.user.as_ref().and_then(Scalar::text))
    }

    pub fn activity_type(&self) -> Option<&str> {
        non_empty(&self.activity_type)
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }
}
