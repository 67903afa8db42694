// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User record.

use super::{lenient, non_empty, RecordIds};
use serde::Deserialize;

/// Registered OctoFit member.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub ids: RecordIds,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub email: Option<String>,
}

impl User {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn username(&self) -> Option<&str> {
        non_empty(&self.username)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }
}
