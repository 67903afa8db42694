// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Home page: hero banner and one feature card per view.

use super::layout::{render_page, Shell};
use crate::config::LOGO_FILE;
use crate::resource::Resource;
use std::fmt::Write;

pub fn render_home(shell: &Shell) -> String {
    let mut body = String::from("<div class=\"octofit-hero text-center\">\n");
    if shell.logo {
        let _ = writeln!(body, r#"<img src="/{}" alt="OctoFit Tracker">"#, LOGO_FILE);
    }
    body.push_str(
        r#"<h1>Welcome to OctoFit Tracker</h1>
<p class="lead">Track your fitness activities, compete on the leaderboard, and manage your team.</p>
</div>
<div class="container mb-5">
<div class="feature-grid">
"#,
    );

    for resource in Resource::ALL {
        let _ = write!(
            body,
            r#"<a href="{path}" class="feature-card-link">
  <div class="card feature-card">
    <div class="feature-icon">{icon}</div>
    <h5 class="card-title fw-semibold">{title}</h5>
    <p class="card-text text-muted">{desc}</p>
    <span class="btn btn-{accent}">View {title}</span>
  </div>
</a>
"#,
            path = resource.page_path(),
            icon = resource.icon(),
            title = resource.title(),
            desc = resource.description(),
            accent = resource.accent(),
        );
    }

    body.push_str("</div>\n</div>\n");
    render_page(shell, "Home", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_feature_cards() {
        let html = render_home(&Shell::default());
        assert_eq!(html.matches(r#"class="feature-card-link""#).count(), 5);
        for resource in Resource::ALL {
            assert!(html.contains(&format!(r#"<a href="{}" class="feature-card-link">"#, resource.page_path())));
            assert!(html.contains(&format!("View {}", resource.title())));
        }
    }
}
