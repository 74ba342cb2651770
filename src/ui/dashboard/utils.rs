//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;
use std::time::Duration;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::Poller => Color::Cyan,
        Worker::Uploader => Color::Green,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8))
        {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Session uptime, largest unit first: `3h 04m 05s`, `4m 05s`, `5s`.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = uptime.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if hours > 0 {
        format!("{}h {:02}m {:02}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {:02}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    if msg.contains("Reqwest error") && msg.contains("Connection refused") {
        return "Backend unreachable (connection refused)".to_string();
    }
    if msg.contains("Reqwest error") && msg.contains("timed out") {
        return "Backend request timed out".to_string();
    }
    msg.to_string()
}

/// A rectangle of the given percentage size, centered in `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_drops_year() {
        assert_eq!(
            format_compact_timestamp("2026-10-18 14:05:09"),
            "10-18 14:05:09"
        );
        assert_eq!(format_compact_timestamp("garbage"), "garbage");
    }

    #[test]
    fn uptime_uses_largest_unit_first() {
        assert_eq!(format_uptime(Duration::from_secs(5)), "5s");
        assert_eq!(format_uptime(Duration::from_secs(245)), "4m 05s");
        assert_eq!(format_uptime(Duration::from_secs(3 * 3600 + 245)), "3h 04m 05s");
    }

    #[test]
    fn connection_refused_is_shortened() {
        let raw = "Failed to fetch stats: Reqwest error: error sending request: Connection refused (os error 111)";
        assert_eq!(
            clean_http_error_message(raw),
            "Backend unreachable (connection refused)"
        );
        assert_eq!(clean_http_error_message("plain"), "plain");
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 30, area);
        assert!(popup.x >= area.x && popup.right() <= area.right());
        assert!(popup.y >= area.y && popup.bottom() <= area.bottom());
        assert_eq!(popup.width, 60);
    }
}
