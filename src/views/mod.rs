// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML rendering for the navigation shell and the five data views.
//!
//! Every data view follows the same shape: a card with the view title and a
//! record-count badge, then either a table or an empty-state message. The
//! per-entity modules only supply columns and rows via [`TableView`].

pub mod activities;
pub mod home;
pub mod layout;
pub mod leaderboard;
pub mod teams;
pub mod users;
pub mod workouts;

use crate::format::{escape_html, record_count_label};
use crate::resource::Resource;
use serde::de::DeserializeOwned;
use std::fmt::Write;

/// Element id of the loading indicator, hidden once the view settles.
pub const LOADING_ID: &str = "view-loading";

/// State of one mounted view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Error(String),
    Ready(Vec<T>),
}

/// Table header cell.
pub struct Column {
    pub label: &'static str,
    pub style: Option<&'static str>,
}

impl Column {
    pub const fn new(label: &'static str) -> Self {
        Self { label, style: None }
    }

    pub const fn styled(label: &'static str, style: &'static str) -> Self {
        Self {
            label,
            style: Some(style),
        }
    }
}

/// A record type that renders as a table row.
pub trait TableView: DeserializeOwned + Default + Send + 'static {
    const RESOURCE: Resource;

    fn columns() -> &'static [Column];

    /// Row key (`_id` / `id`), falls back to the row position.
    fn key(&self) -> Option<String>;

    /// Append the `<td>` cells for the record at 1-based `position`.
    fn write_cells(&self, position: usize, out: &mut String);
}

/// Render a view in any of its three states.
pub fn render_state<T: TableView>(state: &ViewState<T>) -> String {
    match state {
        ViewState::Loading => render_loading(T::RESOURCE),
        ViewState::Error(message) => render_error(message),
        ViewState::Ready(records) => render_ready(records),
    }
}

/// Spinner shown while the upstream request is outstanding.
fn render_loading(resource: Resource) -> String {
    format!(
        r#"<div id="{id}" class="container mt-5 text-center">
  <div class="spinner-border text-{accent}" role="status"><span class="visually-hidden">Loading...</span></div>
  <p class="mt-2 text-muted">Loading {noun}...</p>
</div>
"#,
        id = LOADING_ID,
        accent = resource.accent(),
        noun = resource.noun(),
    )
}

/// Alert box carrying the fetch failure message.
pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="container mt-4">
  <div class="alert alert-danger" role="alert"><strong>Error:&nbsp;</strong> {}</div>
</div>
"#,
        escape_html(message)
    )
}

/// Card with the record count and the table (or the empty-state message).
pub fn render_ready<T: TableView>(records: &[T]) -> String {
    let resource = T::RESOURCE;
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<div class="container mt-4">
<div class="card section-card">
  <div class="card-header">
    <h2>{icon} {title}</h2>
    <span class="badge bg-light record-count">{count}</span>
  </div>
  <div class="card-body">
"#,
        icon = resource.icon(),
        title = resource.title(),
        count = record_count_label(records.len()),
    );

    if records.is_empty() {
        let _ = writeln!(
            html,
            r#"    <p class="empty-state text-muted">{}</p>"#,
            resource.empty_message()
        );
    } else {
        write_table(records, &mut html);
    }

    html.push_str("  </div>\n</div>\n</div>\n");
    html
}

fn write_table<T: TableView>(records: &[T], html: &mut String) {
    html.push_str(
        "    <div class=\"table-responsive\">\n    <table class=\"table octofit-table\">\n      <thead><tr>",
    );
    for column in T::columns() {
        match column.style {
            Some(style) => {
                let _ = write!(html, r#"<th style="{}">{}</th>"#, style, column.label);
            }
            None => {
                let _ = write!(html, "<th>{}</th>", column.label);
            }
        }
    }
    html.push_str("</tr></thead>\n      <tbody>\n");

    for (index, record) in records.iter().enumerate() {
        let position = index + 1;
        let key = record.key().unwrap_or_else(|| index.to_string());
        let _ = write!(html, r#"        <tr data-key="{}">"#, escape_html(&key));
        record.write_cells(position, html);
        html.push_str("</tr>\n");
    }

    html.push_str("      </tbody>\n    </table>\n    </div>\n");
}

/// `#` column cell.
pub(crate) fn position_cell(position: usize) -> String {
    format!(r#"<td><span class="badge bg-secondary">{}</span></td>"#, position)
}

/// Members cell: one badge per member, or "No members".
pub(crate) fn members_cell(members: &[crate::models::Member]) -> String {
    if members.is_empty() {
        return format!("<td>{}</td>", crate::format::muted("No members"));
    }

    let mut cell = String::from("<td>");
    for member in members {
        let _ = write!(
            cell,
            r#"<span class="badge bg-success member">{}</span>"#,
            escape_html(&member.label())
        );
    }
    cell.push_str("</td>");
    cell
}
