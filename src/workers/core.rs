//! Core worker utilities

use crate::events::{Event, EventType, NoticeKind};
use crate::logging::LogLevel;
use tokio::sync::mpsc;

/// Common event sending utilities for workers
#[derive(Clone, Debug)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Send a generic event. A closed channel means the UI is gone.
    pub async fn send_event(&self, event: Event) {
        let _ = self.sender.send(event).await;
    }

    pub async fn send_poll_event(&self, message: String, event_type: EventType, log_level: LogLevel) {
        self.send_event(Event::poller_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_upload_event(
        &self,
        message: String,
        event_type: EventType,
        log_level: LogLevel,
    ) {
        self.send_event(Event::uploader_with_level(message, event_type, log_level))
            .await;
    }

    pub async fn send_notice(&self, kind: NoticeKind, text: String, log_level: LogLevel) {
        self.send_event(Event::notice(kind, text, log_level)).await;
    }
}
