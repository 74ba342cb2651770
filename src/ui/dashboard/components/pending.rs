//! Pending jobs component
//!
//! Renders the head of the backend queue

use super::super::state::DashboardState;
use crate::consts::cli_consts::MAX_PENDING_ROWS;
use ratatui::Frame;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_pending_panel(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let mut lines: Vec<Line> = Vec::new();

    match state.queue() {
        None => lines.push(Line::from("Waiting for first poll...")),
        // Older backends report only the length
        Some(queue) if queue.pending.is_empty() && queue.queue_length > 0 => {
            lines.push(Line::from(Span::styled(
                format!("{} queued", queue.queue_length),
                Style::default().fg(Color::White),
            )))
        }
        Some(queue) if queue.pending.is_empty() => lines.push(Line::from(Span::styled(
            "Queue is empty",
            Style::default().fg(Color::DarkGray),
        ))),
        Some(queue) => {
            for job in queue.pending.iter().take(MAX_PENDING_ROWS) {
                let retry_color = if job.retry_count > 0 {
                    Color::Yellow
                } else {
                    Color::DarkGray
                };
                lines.push(Line::from(vec![
                    Span::styled(job.email.clone(), Style::default().fg(Color::White)),
                    Span::styled(
                        format!("  retry {}", job.retry_count),
                        Style::default().fg(retry_color),
                    ),
                ]));
            }
            let hidden = (queue.queue_length as usize).saturating_sub(MAX_PENDING_ROWS);
            if hidden > 0 {
                lines.push(Line::from(Span::styled(
                    format!("... and {} more", hidden),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }

    let block = Block::default()
        .title("PENDING")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
