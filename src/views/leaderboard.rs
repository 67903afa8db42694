// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Leaderboard table.
//!
//! Rank is the row position in server order. Nothing here sorts: if the
//! server's ordering is wrong, so is the displayed ranking.

use super::{members_cell, Column, TableView};
use crate::format::{format_number, or_placeholder, rank_class, PLACEHOLDER};
use crate::models::LeaderboardEntry;
use crate::resource::Resource;
use std::fmt::Write;

impl TableView for LeaderboardEntry {
    const RESOURCE: Resource = Resource::Leaderboard;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("Rank"),
            Column::new("Team"),
            Column::new("Members"),
            Column::new("Total Score"),
        ];
        COLUMNS
    }

    fn key(&self) -> Option<String> {
        self.ids.key()
    }

    fn write_cells(&self, position: usize, out: &mut String) {
        let _ = write!(
            out,
            r#"<td><span class="{}">{}</span></td><td class="fw-semibold">{}</td>"#,
            rank_class(position),
            position,
            or_placeholder(self.team_name().as_deref()),
        );
        out.push_str(&members_cell(self.members()));

        let score = self
            .score
            .map(format_number)
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let _ = write!(
            out,
            r#"<td><span class="badge bg-info score">{}</span></td>"#,
            score
        );
    }
}
