//! Dashboard header component
//!
//! Renders the title and the connection summary line

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, format_uptime};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title and backend summary.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("MAILQ DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let updated = state
        .last_update_timestamp()
        .as_deref()
        .map(format_compact_timestamp)
        .unwrap_or_else(|| "waiting".to_string());

    let summary = Line::from(vec![
        Span::styled("Backend: ", Style::default().fg(Color::Gray)),
        Span::styled(&state.backend_url, Style::default().fg(Color::LightBlue)),
        Span::styled("  Poll: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}ms", state.poll_interval_ms),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Updated: ", Style::default().fg(Color::Gray)),
        Span::styled(updated, Style::default().fg(Color::Yellow)),
        Span::styled("  Up: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format_uptime(state.start_time.elapsed()),
            Style::default().fg(Color::White),
        ),
    ]);
    f.render_widget(
        Paragraph::new(summary).alignment(Alignment::Center),
        header_chunks[1],
    );
}
