// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team record and its members.

use super::{lenient, lenient_vec, non_empty, RecordIds, Scalar};
use serde::Deserialize;
use serde_json::Value;

/// A team and the people who train together on it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Team {
    #[serde(flatten)]
    pub ids: RecordIds,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub members: Vec<Member>,
}

impl Team {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

/// One team member.
///
/// Depending on the serializer the API returns either nested user objects
/// or bare identifiers, so the raw value is kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Member(pub Value);

impl Member {
    /// Badge text: `name`, then `username`, then the plain value itself.
    pub fn label(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Object(map) => ["name", "username"]
                .iter()
                .filter_map(|k| map.get(*k))
                .filter_map(|v| serde_json::from_value::<Scalar>(v.clone()).ok())
                .find_map(|s| s.text())
                .unwrap_or_else(|| self.0.to_string()),
            other => other.to_string(),
        }
    }
}
