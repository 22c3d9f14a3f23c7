use crate::models::{GaugeMetric, RateLimitSnapshot};
use chrono::{DateTime, Utc};
use owo_colors::{AnsiColors, OwoColorize};
use std::fmt::Write;

pub const BAR_WIDTH: usize = 40;
const RULE_WIDTH: usize = 47;

/// Tier color for a remaining-capacity percentage. Thresholds are
/// inclusive for the higher tier: 50 is green, 20 is yellow.
pub fn tier_color(percent: f64) -> AnsiColors {
    if percent >= 50.0 {
        AnsiColors::Green
    } else if percent >= 20.0 {
        AnsiColors::Yellow
    } else {
        AnsiColors::Red
    }
}

/// Renders a horizontal gauge: filled cells as solid blocks in the tier
/// color, the rest as dim shade glyphs.
pub fn render_bar(percent: f64, width: usize) -> String {
    let filled = (width as f64 * percent / 100.0).round() as usize;
    let empty = width.saturating_sub(filled);
    format!(
        "{}{}",
        "█".repeat(filled).color(tier_color(percent)),
        "░".repeat(empty).dimmed()
    )
}

/// Groups a count with comma thousands separators (75000 -> "75,000").
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable time until the reset instant.
///
/// Hours and minutes are shown when nonzero; seconds appear alone only
/// when both are zero. Elapsed resets render as "now". Anything that
/// fails to parse renders as "unknown" rather than erroring.
pub fn format_remaining_time(reset: &str, now: DateTime<Utc>) -> String {
    let Some(reset_at) = parse_iso8601(reset) else {
        return "unknown".to_string();
    };
    let total_seconds = reset_at.signed_duration_since(now).num_seconds();
    if total_seconds <= 0 {
        return "now".to_string();
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }
    parts.join(" ")
}

fn parse_iso8601(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Assembles the full terminal report. Sections whose limit is zero are
/// skipped; the reset line appears only when the API sent a reset header.
pub fn report(snapshot: &RateLimitSnapshot, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "⛽ Claude Fuel Gauge".bold());
    let _ = writeln!(out, "{}", "═".repeat(RULE_WIDTH));
    let _ = writeln!(out);

    if snapshot.tokens.is_reported() {
        gauge_section(&mut out, "Tokens:  ", snapshot.tokens);
        let _ = writeln!(out);
    }

    gauge_section(&mut out, "Input:   ", snapshot.input_tokens);
    gauge_section(&mut out, "Output:  ", snapshot.output_tokens);
    gauge_section(&mut out, "Reqs:    ", snapshot.requests);

    if let Some(reset) = &snapshot.tokens_reset {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Resets:  {} (in {})",
            reset,
            format_remaining_time(reset, now)
        );
    }

    let _ = writeln!(out);
    out
}

fn gauge_section(out: &mut String, label: &str, metric: GaugeMetric) {
    if !metric.is_reported() {
        return;
    }
    let percent = metric.percent();
    let _ = writeln!(
        out,
        "{label}[{}]  {percent:.0}%",
        render_bar(percent, BAR_WIDTH)
    );
    let _ = writeln!(
        out,
        "         {} / {} remaining",
        group_thousands(metric.remaining),
        group_thousands(metric.limit)
    );
}
