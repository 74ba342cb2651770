//! Dashboard footer component
//!
//! Renders key help, or the upload path line while it is open

use super::super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &DashboardState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_type(BorderType::Thick);

    let footer = match state.upload_input() {
        Some(input) => {
            // Blinking-cursor stand-in, toggles every few frames
            let cursor = if (state.tick / 5) % 2 == 0 { "_" } else { " " };
            Paragraph::new(Line::from(vec![
                Span::styled(
                    "CSV file: ",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(input.to_string()),
                Span::raw(cursor),
                Span::styled(
                    "   [Enter] Upload  [Esc] Cancel",
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
            .block(block)
        }
        None => Paragraph::new("[U] Upload CSV | [R] Refresh | [Q] Quit")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block),
    };
    f.render_widget(footer, area);
}
