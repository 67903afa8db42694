// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard entry.
//!
//! Entries carry no rank of their own: rank is the entry's position in the
//! sequence the server returned.

use super::{lenient, lenient_vec, Member, RecordIds, Scalar};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub ids: RecordIds,
    #[serde(default, deserialize_with = "lenient")]
    pub team: Option<TeamRef>,
    #[serde(default, deserialize_with = "lenient")]
    pub score: Option<f64>,
}

/// The team an entry belongs to: a nested object or a plain reference.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TeamRef {
    Plain(Scalar),
    Detailed(TeamSummary),
}

/// Nested team as embedded in a leaderboard entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamSummary {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub members: Vec<Member>,
}

impl LeaderboardEntry {
    /// Team name, or the plain team reference.
    pub fn team_name(&self) -> Option<String> {
        match self.team.as_ref()? {
            TeamRef::Detailed(team) => team.name.clone().filter(|n| !n.is_empty()),
            TeamRef::Plain(reference) => reference.text(),
        }
    }

    /// Members of a nested team; empty for plain references.
    pub fn members(&self) -> &[Member] {
        match &self.team {
            Some(TeamRef::Detailed(team)) => &team.members,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_team() {
        let entry: LeaderboardEntry = serde_json::from_value(json!({
            "team": {"name": "Team Marvel", "members": [{"name": "Tony"}]},
            "score": 120.5
        }))
        .unwrap();

        assert_eq!(entry.team_name().as_deref(), Some("Team Marvel"));
        assert_eq!(entry.members().len(), 1);
        assert_eq!(entry.score, Some(120.5));
    }

    #[test]
    fn test_plain_team_reference() {
        let entry: LeaderboardEntry =
            serde_json::from_value(json!({"team": "Team DC", "score": 0})).unwrap();
        assert_eq!(entry.team_name().as_deref(), Some("Team DC"));
        assert!(entry.members().is_empty());
        assert_eq!(entry.score, Some(0.0));

        let entry: LeaderboardEntry = serde_json::from_value(json!({"team": 4})).unwrap();
        assert_eq!(entry.team_name().as_deref(), Some("4"));
    }

    #[test]
    fn test_team_object_without_name() {
        let entry: LeaderboardEntry =
            serde_json::from_value(json!({"team": {"members": []}})).unwrap();
        assert_eq!(entry.team_name(), None);
        assert_eq!(entry.score, None);
    }
}
