//! Dashboard main renderer

use super::components::{counters, footer, header, logs, notice, pending, queue};
use super::state::DashboardState;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(content_chunks[0]);

    queue::render_queue_panel(f, left_chunks[0], state);
    counters::render_counters(f, left_chunks[1], state);
    pending::render_pending_panel(f, left_chunks[2], state);
    logs::render_logs_panel(f, content_chunks[1], state);
    footer::render_footer(f, main_chunks[2], state);

    // Drawn last so it covers the panels
    notice::render_notice(f, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::types::{PendingJob, QueueSnapshot, StatsSnapshot};
    use crate::events::{Event, NoticeKind, Worker};
    use crate::logging::LogLevel;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::{Duration, Instant};

    fn draw(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn state() -> DashboardState {
        DashboardState::new(
            "http://localhost:8080".to_string(),
            Instant::now(),
            UIConfig::new(true, 2_000),
        )
    }

    #[test]
    fn renders_all_display_sinks() {
        let mut state = state();
        state.add_event(Event::total_emails(10));
        state.add_event(Event::queue(
            Worker::Poller,
            QueueSnapshot {
                queue_length: 4,
                pending: vec![PendingJob {
                    email: "carol@example.com".to_string(),
                    retry_count: 1,
                }],
            },
        ));
        state.add_event(Event::stats(Worker::Poller, StatsSnapshot { sent: 7, failed: 3 }));
        state.update();
        state.start_time = Instant::now() - Duration::from_secs(245);

        let screen = draw(&state);
        assert!(screen.contains("Queue length: 4"));
        assert!(screen.contains("60.0%"));
        assert!(screen.contains("SENT"));
        assert!(screen.contains("FAILED"));
        assert!(screen.contains("carol@example.com"));
        assert!(screen.contains("http://localhost:8080"));
        assert!(screen.contains("Up: 4m 05s"));
    }

    #[test]
    fn zero_total_renders_placeholder_instead_of_nan() {
        let mut state = state();
        state.add_event(Event::queue(
            Worker::Poller,
            QueueSnapshot {
                queue_length: 3,
                pending: Vec::new(),
            },
        ));
        state.update();

        let screen = draw(&state);
        assert!(!screen.contains("NaN"));
        assert!(!screen.contains("inf"));
        assert!(screen.contains("--"));
    }

    #[test]
    fn pending_panel_falls_back_to_length_without_job_list() {
        let mut state = state();
        state.add_event(Event::queue(
            Worker::Poller,
            QueueSnapshot {
                queue_length: 3,
                pending: Vec::new(),
            },
        ));
        state.update();

        let screen = draw(&state);
        assert!(screen.contains("3 queued"));
        assert!(!screen.contains("Queue is empty"));

        state.add_event(Event::queue(
            Worker::Poller,
            QueueSnapshot {
                queue_length: 0,
                pending: Vec::new(),
            },
        ));
        state.update();
        assert!(draw(&state).contains("Queue is empty"));
    }

    #[test]
    fn notice_popup_is_drawn_on_top() {
        let mut state = state();
        state.add_event(Event::notice(
            NoticeKind::Error,
            "Upload failed: boom".to_string(),
            LogLevel::Error,
        ));
        state.update();

        let screen = draw(&state);
        assert!(screen.contains("Press any key to continue"));
        assert!(screen.contains("Upload failed: boom"));
    }

    #[test]
    fn upload_line_replaces_key_help() {
        let mut state = state();
        state.open_upload_input();
        state.upload_input_mut().unwrap().push_str("batch.csv");

        let screen = draw(&state);
        assert!(screen.contains("CSV file: batch.csv"));
        assert!(!screen.contains("[U] Upload CSV"));
    }
}
