// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Teams table.

use super::{members_cell, position_cell, Column, TableView};
use crate::format::or_placeholder;
use crate::models::Team;
use crate::resource::Resource;
use std::fmt::Write;

impl TableView for Team {
    const RESOURCE: Resource = Resource::Teams;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("#"),
            Column::new("Team Name"),
            Column::new("Members"),
            Column::styled("Member Count", "white-space: nowrap"),
        ];
        COLUMNS
    }

    fn key(&self) -> Option<String> {
        self.ids.key()
    }

    fn write_cells(&self, position: usize, out: &mut String) {
        out.push_str(&position_cell(position));
        let _ = write!(
            out,
            r#"<td class="fw-semibold">{}</td>"#,
            or_placeholder(self.name())
        );
        out.push_str(&members_cell(&self.members));
        let _ = write!(
            out,
            r#"<td><span class="badge bg-primary">{}</span></td>"#,
            self.members.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Team;
    use crate::views::render_ready;
    use serde_json::json;

    #[test]
    fn test_member_badges_and_count() {
        let team: Team = serde_json::from_value(json!({
            "name": "Team Marvel",
            "members": [{"name": "Tony"}, {"username": "cap"}]
        }))
        .unwrap();

        let html = render_ready(&[team]);
        assert_eq!(html.matches("badge bg-success member").count(), 2);
        assert!(html.contains(">Tony<"));
        assert!(html.contains(">cap<"));
        assert!(html.contains(r#"<span class="badge bg-primary">2</span>"#));
    }

    #[test]
    fn test_no_members() {
        let html = render_ready(&[Team::default()]);
        assert!(html.contains("No members"));
        assert!(html.contains(r#"<span class="badge bg-primary">0</span>"#));
        assert!(html.contains("N/A"));
    }
}
