// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workouts table.

use super::{position_cell, Column, TableView};
use crate::format::{muted, or_placeholder, round_half_up, PLACEHOLDER};
use crate::models::Workout;
use crate::resource::Resource;
use std::fmt::Write;

impl TableView for Workout {
    const RESOURCE: Resource = Resource::Workouts;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("#"),
            Column::new("Workout Name"),
            Column::new("Description"),
            Column::new("Duration (min)"),
        ];
        COLUMNS
    }

    fn key(&self) -> Option<String> {
        self.ids.key()
    }

    fn write_cells(&self, position: usize, out: &mut String) {
        out.push_str(&position_cell(position));

        let duration = match self.duration {
            Some(d) => format!(
                r#"<span class="badge bg-danger">{} min</span>"#,
                round_half_up(d)
            ),
            None => muted(PLACEHOLDER),
        };

        let _ = write!(
            out,
            r#"<td class="fw-semibold workout-name">{}</td><td class="workout-description">{}</td><td style="white-space: nowrap">{}</td>"#,
            or_placeholder(self.name()),
            or_placeholder(self.description()),
            duration,
        );
    }
}
