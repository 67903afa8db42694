// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared display helpers: dates, durations, rank badges, labels, escaping.

use chrono::NaiveDate;

/// Muted placeholder shown for any missing field.
pub const PLACEHOLDER: &str = "N/A";

/// Format an ISO `YYYY-MM-DD` date as `Mar 5, 2026`.
///
/// The components are parsed as plain integers and rebuilt as a calendar
/// date, so no timezone is ever applied. Returns `None` for an empty input;
/// anything that isn't three positive integers forming a real date with a
/// four-digit year comes back unchanged.
pub fn format_iso_date(raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }

    let parts: Vec<&str> = raw.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return Some(raw.to_string());
    };

    let parsed = (
        positive_int(year),
        positive_int(month),
        positive_int(day),
    );
    let date = match parsed {
        (Some(y), Some(m), Some(d)) if y >= 1000 => i32::try_from(y)
            .ok()
            .and_then(|y| NaiveDate::from_ymd_opt(y, m, d)),
        _ => None,
    };

    Some(match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    })
}

fn positive_int(part: &str) -> Option<u32> {
    part.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> i64 {
    // f64::round sends halves away from zero; pull negative halves back up.
    let rounded = value.round();
    if value - rounded == 0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// Render a number the way JSON/JavaScript would (`30`, not `30.0`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// CSS class for a leaderboard rank badge.
pub fn rank_class(rank: usize) -> &'static str {
    match rank {
        1 => "rank-badge rank-gold",
        2 => "rank-badge rank-silver",
        3 => "rank-badge rank-bronze",
        _ => "rank-badge rank-other",
    }
}

/// `1 record`, `0 records`, `7 records`.
pub fn record_count_label(count: usize) -> String {
    if count == 1 {
        "1 record".to_string()
    } else {
        format!("{} records", count)
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Muted placeholder markup.
pub fn muted(text: &str) -> String {
    format!(r#"<span class="text-muted">{}</span>"#, escape_html(text))
}

/// Escaped value, or the muted `N/A` placeholder when absent.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) => escape_html(v),
        None => muted(PLACEHOLDER),
    }
}
