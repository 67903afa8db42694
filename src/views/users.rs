// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Users table.

use super::{position_cell, Column, TableView};
use crate::format::or_placeholder;
use crate::models::User;
use crate::resource::Resource;
use std::fmt::Write;

impl TableView for User {
    const RESOURCE: Resource = Resource::Users;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("#"),
            Column::new("Name"),
            Column::new("Username"),
            Column::new("Email"),
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
            r#"<td class="fw-semibold">{}</td><td><span class="badge bg-primary">{}</span></td><td>{}</td>"#,
            or_placeholder(self.name()),
            or_placeholder(self.username()),
            or_placeholder(self.email()),
        );
    }
}
