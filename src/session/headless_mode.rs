//! Headless mode execution

use super::SessionData;
use crate::cli_messages::{
    print_session_exit_success, print_session_shutdown, print_session_starting,
};
use crate::events::{Event, Payload};
use crate::progress::QueueProgress;
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use std::error::Error;
use std::time::Instant;

/// Runs the application in headless mode
///
/// This function handles:
/// 1. Console output of every snapshot and notice
/// 2. Ctrl+C shutdown handling
/// 3. Stopping the poll loop on the way out
pub async fn run_headless_mode(mut session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting("headless", &session.backend_url, session.poll_interval);

    // Trigger shutdown on Ctrl+C
    let shutdown_sender_clone = session.shutdown_sender.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_sender_clone.send(());
        }
    });

    let mut shutdown_receiver = session.shutdown_sender.subscribe();
    let mut state = DashboardState::new(
        session.backend_url.clone(),
        Instant::now(),
        UIConfig::new(false, session.poll_interval.as_millis() as u64),
    );

    // Event loop: print events to console until shutdown
    loop {
        tokio::select! {
            Some(event) = session.event_receiver.recv() => {
                if let Some(line) = headless_line(&mut state, event) {
                    println!("{}", line);
                }
            }
            _ = shutdown_receiver.recv() => {
                break;
            }
        }
    }

    print_session_shutdown();
    session.poll_handle.stop().await;
    print_session_exit_success();

    Ok(())
}

/// Applies one event and returns the console line for it, if any.
pub fn headless_line(state: &mut DashboardState, event: Event) -> Option<String> {
    let line = match &event.payload {
        Some(Payload::Queue(queue)) => Some(format!(
            "Queue length: {} | Progress: {}",
            queue.queue_length,
            QueueProgress::compute(state.total_emails(), queue.queue_length)
        )),
        Some(Payload::Stats(stats)) => {
            Some(format!("Sent: {} | Failed: {}", stats.sent, stats.failed))
        }
        Some(Payload::TotalEmails(total)) => Some(format!("Tracking {} emails", total)),
        Some(Payload::Notice(_)) => Some(event.to_string()),
        None => event.should_display().then(|| event.to_string()),
    };

    state.add_event(event);
    state.update();
    // Nobody can acknowledge a notice here; it was printed.
    while state.dismiss_notice().is_some() {}

    line
}
