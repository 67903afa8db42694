// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Navigation shell: document head, navbar, footer.

use crate::config::LOGO_FILE;
use crate::format::escape_html;
use crate::resource::Resource;
use axum::http::StatusCode;
use std::fmt::Write;

/// Per-page shell options.
#[derive(Debug, Clone, Copy, Default)]
pub struct Shell {
    /// Whether the logo asset exists; the `<img>` is omitted otherwise.
    pub logo: bool,
    /// Highlighted navbar entry.
    pub active: Option<Resource>,
}

impl Shell {
    pub fn new(logo: bool, active: Option<Resource>) -> Self {
        Self { logo, active }
    }
}

const STYLESHEET: &str = r#"
:root { --octo-dark: #1b1f3b; --octo-accent: #6f42c1; --muted: #6c757d; }
* { box-sizing: border-box; }
body { margin: 0; font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; background: #f4f6fb; color: #212529; line-height: 1.5; }
a { color: inherit; }
.container { max-width: 1140px; margin: 0 auto; padding: 0 1rem; }
.mt-4 { margin-top: 1.5rem; } .mt-5 { margin-top: 3rem; } .mt-2 { margin-top: .5rem; } .mb-5 { margin-bottom: 3rem; }
.text-center { text-align: center; } .text-muted { color: var(--muted); } .fw-semibold { font-weight: 600; }
.visually-hidden { position: absolute; width: 1px; height: 1px; overflow: hidden; clip: rect(0,0,0,0); }
.octofit-navbar { background: var(--octo-dark); padding: .6rem 0; }
.octofit-navbar .container { display: flex; align-items: center; flex-wrap: wrap; gap: .5rem; }
.navbar-brand { color: #fff; font-weight: 700; font-size: 1.2rem; text-decoration: none; display: flex; align-items: center; gap: .5rem; margin-right: auto; }
.navbar-brand-logo { height: 36px; }
.navbar-nav { list-style: none; display: flex; flex-wrap: wrap; gap: .25rem; margin: 0; padding: 0; }
.nav-link { color: rgba(255,255,255,.75); text-decoration: none; padding: .4rem .75rem; border-radius: .375rem; }
.nav-link:hover { color: #fff; background: rgba(255,255,255,.08); }
.nav-link.active { color: #fff; background: var(--octo-accent); }
.octofit-hero { background: linear-gradient(135deg, var(--octo-dark), var(--octo-accent)); color: #fff; padding: 3rem 1rem; margin-bottom: 2rem; }
.octofit-hero img { max-height: 120px; }
.octofit-hero h1 { font-size: 2.5rem; margin: .5rem 0; }
.feature-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.feature-card-link { text-decoration: none; }
.card { background: #fff; border-radius: .75rem; box-shadow: 0 2px 10px rgba(0,0,0,.06); overflow: hidden; }
.feature-card { height: 100%; padding: 1.5rem; display: flex; flex-direction: column; transition: transform .15s ease; }
.feature-card:hover { transform: translateY(-4px); }
.feature-icon { font-size: 2.2rem; }
.card-text { flex-grow: 1; }
.card-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.25rem; background: var(--octo-dark); color: #fff; }
.card-header h2 { margin: 0; font-size: 1.5rem; }
.empty-state { padding: 1.5rem; margin: 0; }
.table-responsive { overflow-x: auto; }
.table { width: 100%; border-collapse: collapse; }
.table th, .table td { padding: .65rem .9rem; border-bottom: 1px solid #e9ecef; text-align: left; vertical-align: middle; }
.table thead th { background: #f1f0fa; }
.table tbody tr:nth-child(odd) { background: #fafafe; }
.table tbody tr:hover { background: #eef0fb; }
.workout-name { min-width: 180px; }
.workout-description { min-width: 240px; max-width: 420px; white-space: normal; word-break: break-word; }
.badge { display: inline-block; padding: .3em .6em; border-radius: .375rem; font-size: .8em; font-weight: 700; color: #fff; margin: 0 .25rem .25rem 0; }
.bg-primary { background: #0d6efd; } .bg-secondary { background: #6c757d; } .bg-success { background: #198754; }
.bg-danger { background: #dc3545; } .bg-warning { background: #ffc107; color: #212529; } .bg-info { background: #0dcaf0; color: #212529; }
.bg-light { background: #f8f9fa; color: #212529; }
.btn { display: inline-block; align-self: flex-start; margin-top: 1rem; padding: .45rem .9rem; border-radius: .375rem; color: #fff; font-weight: 600; }
.btn-primary { background: #0d6efd; } .btn-success { background: #198754; } .btn-warning { background: #ffc107; color: #212529; }
.btn-danger { background: #dc3545; } .btn-info { background: #0dcaf0; color: #212529; }
.rank-badge { display: inline-flex; align-items: center; justify-content: center; width: 2.2rem; height: 2.2rem; border-radius: 50%; font-weight: 700; }
.rank-gold { background: #ffd700; } .rank-silver { background: #c0c0c0; } .rank-bronze { background: #cd7f32; color: #fff; } .rank-other { background: #e9ecef; }
.alert { padding: 1rem 1.25rem; border-radius: .5rem; }
.alert-danger { background: #f8d7da; color: #842029; border: 1px solid #f5c2c7; }
.spinner-border { display: inline-block; width: 2.5rem; height: 2.5rem; border: .25em solid currentColor; border-right-color: transparent; border-radius: 50%; animation: spin .75s linear infinite; }
.text-primary { color: #0d6efd; } .text-success { color: #198754; } .text-warning { color: #ffc107; } .text-danger { color: #dc3545; } .text-info { color: #0dcaf0; }
@keyframes spin { to { transform: rotate(360deg); } }
footer { text-align: center; color: var(--muted); padding: 1.5rem 0; border-top: 1px solid #dee2e6; margin-top: 1.5rem; }
"#;

/// Document head, navbar and the opening `<main>` tag.
pub fn page_start(shell: &Shell, title: &str) -> String {
    let mut html = String::with_capacity(STYLESHEET.len() + 2048);

    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · OctoFit Tracker</title>
<style>{css}</style>
</head>
<body>
<nav class="octofit-navbar">
<div class="container">
<a class="navbar-brand" href="/">"#,
        title = escape_html(title),
        css = STYLESHEET,
    );

    if shell.logo {
        let _ = write!(
            html,
            r#"<img src="/{}" alt="OctoFit logo" class="navbar-brand-logo">"#,
            LOGO_FILE
        );
    }
    html.push_str("OctoFit Tracker</a>\n<ul class=\"navbar-nav\">\n");

    for resource in Resource::ALL {
        let active = shell.active == Some(resource);
        let _ = writeln!(
            html,
            r#"<li class="nav-item"><a class="nav-link{}" href="{}"{}>{} {}</a></li>"#,
            if active { " active" } else { "" },
            resource.page_path(),
            if active { r#" aria-current="page""# } else { "" },
            resource.icon(),
            resource.title(),
        );
    }

    html.push_str("</ul>\n</div>\n</nav>\n<main>\n");
    html
}

/// Closing `<main>`, footer and document end.
pub fn page_end() -> &'static str {
    "</main>\n<footer><small>© 2026 OctoFit Tracker</small></footer>\n</body>\n</html>\n"
}

/// A complete page around `body`.
pub fn render_page(shell: &Shell, title: &str, body: &str) -> String {
    let mut html = page_start(shell, title);
    html.push_str(body);
    html.push_str(page_end());
    html
}

/// Page for the server's own errors (404, 500).
pub fn error_page(shell: &Shell, status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        r#"<div class="container mt-5 text-center">
  <h1>{code} · {reason}</h1>
  <p class="text-muted">{message}</p>
  <p><a href="/">Back to OctoFit Tracker</a></p>
</div>
"#,
        code = status.as_u16(),
        reason = reason,
        message = escape_html(message),
    );
    render_page(shell, reason, &body)
}
