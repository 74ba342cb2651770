//! Queue panel component
//!
//! Renders the queue length and the batch progress gauge

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph};

pub fn render_queue_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3)])
        .split(area);

    let queue_length = state
        .queue()
        .map(|q| q.queue_length.to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(vec![
            Span::styled("Queue length: ", Style::default().fg(Color::Gray)),
            Span::styled(
                queue_length,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Tracking: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} emails", state.total_emails()),
                Style::default().fg(Color::LightBlue),
            ),
        ]),
    ];

    let block = Block::default()
        .title("QUEUE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let progress = state.progress();
    let gauge_color = match progress.percent() {
        None => Color::DarkGray,
        Some(p) if p >= 100.0 => Color::LightGreen,
        Some(_) => Color::LightBlue,
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Progress")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(gauge_color)),
        )
        .gauge_style(
            Style::default()
                .fg(gauge_color)
                .add_modifier(Modifier::BOLD),
        )
        .ratio(progress.ratio())
        .label(progress.to_string());
    f.render_widget(gauge, chunks[1]);
}
