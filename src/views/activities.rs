// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities table.

use super::{position_cell, Column, TableView};
use crate::format::{escape_html, format_iso_date, format_number, muted, or_placeholder, PLACEHOLDER};
use crate::models::Activity;
use crate::resource::Resource;
use std::fmt::Write;

impl TableView for Activity {
    const RESOURCE: Resource = Resource::Activities;

    fn columns() -> &'static [Column] {
        const COLUMNS: &[Column] = &[
            Column::new("#"),
            Column::new("User"),
            Column::new("Activity Type"),
            Column::new("Duration (min)"),
            Column::new("Date"),
        ];
        COLUMNS
    }

    fn key(&self) -> Option<String> {
        self.ids.key()
    }

    fn write_cells(&self, position: usize, out: &mut String) {
        out.push_str(&position_cell(position));

        let duration = match self.duration {
            Some(d) => format_number(d),
            None => muted(PLACEHOLDER),
        };
        let date = self.date().and_then(format_iso_date);

        let _ = write!(
            out,
            r#"<td class="fw-semibold">{}</td><td><span class="badge bg-warning">{}</span></td><td>{}</td><td>{}</td>"#,
            or_placeholder(self.owner().as_deref()),
            escape_html(self.activity_type().unwrap_or(PLACEHOLDER)),
            duration,
            or_placeholder(date.as_deref()),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Activity;
    use crate::views::render_ready;
    use serde_json::json;

    #[test]
    fn test_activity_row() {
        let activity: Activity = serde_json::from_value(json!({
            "_id": "a1",
            "user": "natasha",
            "activity_type": "running",
            "duration": 42.5,
            "date": "2026-03-05"
        }))
        .unwrap();

        let html = render_ready(&[activity]);
        assert!(html.contains(r#"data-key="a1""#));
        assert!(html.contains(">natasha<"));
        assert!(html.contains(">running<"));
        assert!(html.contains("<td>42.5</td>"));
        assert!(html.contains("<td>Mar 5, 2026</td>"));
    }

    #[test]
    fn test_unparseable_date_is_shown_verbatim() {
        let activity: Activity =
            serde_json::from_value(json!({"date": "sometime", "duration": 0})).unwrap();
        let html = render_ready(&[activity]);
        assert!(html.contains("<td>sometime</td>"));
        assert!(html.contains("<td>0</td>"));
    }

    #[test]
    fn test_missing_fields_use_placeholder() {
        let html = render_ready(&[Activity::default()]);
        assert_eq!(html.matches("N/A").count(), 4);
    }
}
