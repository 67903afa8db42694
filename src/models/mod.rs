// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Read-only projections of the fitness API records.
//!
//! Every field is optional and tolerant: a value of the wrong JSON type is
//! treated as absent instead of failing the whole record.

pub mod activity;
pub mod envelope;
pub mod leaderboard;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::{LeaderboardEntry, TeamRef};
pub use team::{Member, Team};
pub use user::User;
pub use workout::Workout;

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a field, mapping any type mismatch to `None`.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Like [`lenient`], for sequences: anything but an array becomes empty.
pub(crate) fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// A string-or-number value, as ids and foreign keys arrive from the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    /// Display text; `None` for an empty string.
    pub fn text(&self) -> Option<String> {
        match self {
            Scalar::Text(s) if s.is_empty() => None,
            Scalar::Text(s) => Some(s.clone()),
            Scalar::Number(n) => Some(n.to_string()),
        }
    }
}

/// `id` / `_id` pair carried by every record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordIds {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<Scalar>,
    #[serde(rename = "_id", default, deserialize_with = "lenient")]
    pub mongo_id: Option<Scalar>,
}

impl RecordIds {
    /// Stable row key: `_id`, then `id`.
    pub fn key(&self) -> Option<String> {
        self.mongo_id
            .as_ref()
            .and_then(Scalar::text)
            .or_else(|| self.id.as_ref().and_then(Scalar::text))
    }
}

/// Drop empty strings so they fall back to the placeholder.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
