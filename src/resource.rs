// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The five data views and their static route table.

/// One of the API collections, each backing a routed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Users,
    Teams,
    Activities,
    Workouts,
    Leaderboard,
}

impl Resource {
    /// Navigation order.
    pub const ALL: [Resource; 5] = [
        Resource::Users,
        Resource::Teams,
        Resource::Activities,
        Resource::Workouts,
        Resource::Leaderboard,
    ];

    /// Collection name in the API (`/api/{name}/`).
    pub fn api_name(self) -> &'static str {
        match self {
            Resource::Users => "users",
            Resource::Teams => "teams",
            Resource::Activities => "activities",
            Resource::Workouts => "workouts",
            Resource::Leaderboard => "leaderboard",
        }
    }

    /// Page route served by this app.
    pub fn page_path(self) -> &'static str {
        match self {
            Resource::Users => "/users",
            Resource::Teams => "/teams",
            Resource::Activities => "/activities",
            Resource::Workouts => "/workouts",
            Resource::Leaderboard => "/leaderboard",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Resource::Users => "Users",
            Resource::Teams => "Teams",
            Resource::Activities => "Activities",
            Resource::Workouts => "Workouts",
            Resource::Leaderboard => "Leaderboard",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Resource::Users => "👤",
            Resource::Teams => "🏆",
            Resource::Activities => "🏃",
            Resource::Workouts => "💪",
            Resource::Leaderboard => "📊",
        }
    }

    /// Home page card blurb.
    pub fn description(self) -> &'static str {
        match self {
            Resource::Users => "View and manage all registered OctoFit members.",
            Resource::Teams => "Browse teams and see who trains together.",
            Resource::Activities => "Log and review fitness activities across the community.",
            Resource::Workouts => "Explore personalised workout suggestions.",
            Resource::Leaderboard => "See who is leading the pack in the competitive rankings.",
        }
    }

    /// Accent colour name, shared by the card button and the spinner.
    pub fn accent(self) -> &'static str {
        match self {
            Resource::Users => "primary",
            Resource::Teams => "success",
            Resource::Activities => "warning",
            Resource::Workouts => "danger",
            Resource::Leaderboard => "info",
        }
    }

    /// Message shown instead of an empty table.
    pub fn empty_message(self) -> &'static str {
        match self {
            Resource::Users => "No users found.",
            Resource::Teams => "No teams found.",
            Resource::Activities => "No activities found.",
            Resource::Workouts => "No workouts found.",
            Resource::Leaderboard => "No leaderboard entries found.",
        }
    }

    /// Lowercase noun for "Loading ..." text.
    pub fn noun(self) -> &'static str {
        self.api_name()
    }
}
