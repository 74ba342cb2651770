//! Event System
//!
//! Types for worker events flowing to the dashboard, and their logging rules

use crate::backend::types::{QueueSnapshot, StatsSnapshot};
use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Worker {
    /// Periodic status poller.
    Poller,
    /// Batch upload path.
    Uploader,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Notice,
    /// Carries data for the display sinks; never shown in the activity log.
    Update,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message the user has to acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// Data attached to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Queue(QueueSnapshot),
    Stats(StatsSnapshot),
    /// New batch total, published once per successful upload.
    TotalEmails(u64),
    Notice(Notice),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub worker: Worker,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
    pub payload: Option<Payload>,
}

impl Event {
    fn new(worker: Worker, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            worker,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
            payload: None,
        }
    }

    fn update(worker: Worker, msg: String, payload: Payload) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(worker, msg, EventType::Update, LogLevel::Debug)
        }
    }

    pub fn queue(worker: Worker, snapshot: QueueSnapshot) -> Self {
        let msg = format!("Queue length {}", snapshot.queue_length);
        Self::update(worker, msg, Payload::Queue(snapshot))
    }

    pub fn stats(worker: Worker, snapshot: StatsSnapshot) -> Self {
        let msg = format!("Sent {} / failed {}", snapshot.sent, snapshot.failed);
        Self::update(worker, msg, Payload::Stats(snapshot))
    }

    pub fn total_emails(total: u64) -> Self {
        Self::update(
            Worker::Uploader,
            format!("Tracking {} emails", total),
            Payload::TotalEmails(total),
        )
    }

    pub fn notice(kind: NoticeKind, text: String, log_level: LogLevel) -> Self {
        let notice = Notice {
            kind,
            text: text.clone(),
        };
        Self {
            payload: Some(Payload::Notice(notice)),
            ..Self::new(Worker::Uploader, text, EventType::Notice, log_level)
        }
    }

    pub fn poller_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Poller, msg, event_type, log_level)
    }

    pub fn uploader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Worker::Uploader, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Data updates feed the panels, not the log
        if self.event_type == EventType::Update {
            return false;
        }
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
