//! Notice popup component
//!
//! Modal message the user acknowledges with any key

use super::super::state::DashboardState;
use super::super::utils::centered_rect;
use crate::events::NoticeKind;
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_notice(f: &mut Frame, state: &DashboardState) {
    let Some(notice) = state.current_notice() else {
        return;
    };

    let (title, color) = match notice.kind {
        NoticeKind::Info => ("NOTICE", Color::LightGreen),
        NoticeKind::Error => ("ERROR", Color::LightRed),
    };

    let area = centered_rect(60, 30, f.area());
    let lines = vec![
        Line::from(Span::styled(
            notice.text.clone(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .padding(Padding::uniform(1)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
