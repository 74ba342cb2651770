//! Sent/failed counters component

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the sent and failed counters side by side.
pub fn render_counters(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (sent, failed) = match state.stats() {
        Some(stats) => (stats.sent.to_string(), stats.failed.to_string()),
        None => ("-".to_string(), "-".to_string()),
    };

    f.render_widget(counter("SENT", sent, Color::Green), chunks[0]);
    f.render_widget(counter("FAILED", failed, Color::Red), chunks[1]);
}

fn counter(title: &'static str, value: String, color: Color) -> Paragraph<'static> {
    Paragraph::new(value)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
}
