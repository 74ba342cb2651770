//! Dashboard state management
//!
//! Contains the dashboard state struct: the tracked batch total plus the
//! latest snapshot behind every display sink

use crate::backend::types::{QueueSnapshot, StatsSnapshot};
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::{Event as WorkerEvent, Notice};
use crate::progress::QueueProgress;
use crate::ui::app::UIConfig;

use std::collections::VecDeque;
use std::time::Instant;

/// Dashboard state, owned by the UI loop.
#[derive(Debug)]
pub struct DashboardState {
    /// Backend the dashboard is polling.
    pub backend_url: String,
    /// Session start, for the uptime shown in the header.
    pub start_time: Instant,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<WorkerEvent>,
    /// Activity logs for display
    pub activity_logs: VecDeque<WorkerEvent>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Poll interval, for the header
    pub poll_interval_ms: u64,
    /// Animation tick counter
    pub tick: usize,

    /// Emails in the last uploaded batch window. Zero until an upload succeeds.
    total_emails: u64,
    /// Latest queue snapshot, if any poll has succeeded yet
    queue: Option<QueueSnapshot>,
    /// Latest stats snapshot, if any poll has succeeded yet
    stats: Option<StatsSnapshot>,
    /// Timestamp of the last snapshot applied
    last_update_timestamp: Option<String>,
    /// Notices waiting to be acknowledged, oldest first
    notices: VecDeque<Notice>,
    /// Path being typed in the upload line, when it is open
    upload_input: Option<String>,
}

impl DashboardState {
    /// Creates a new instance of the dashboard state.
    pub fn new(backend_url: String, start_time: Instant, ui_config: UIConfig) -> Self {
        Self {
            backend_url,
            start_time,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            poll_interval_ms: ui_config.poll_interval_ms,
            tick: 0,
            total_emails: 0,
            queue: None,
            stats: None,
            last_update_timestamp: None,
            notices: VecDeque::new(),
            upload_input: None,
        }
    }

    /// The only way the tracked total changes.
    pub fn record_batch_total(&mut self, total: u64) {
        self.total_emails = total;
    }

    pub fn total_emails(&self) -> u64 {
        self.total_emails
    }

    pub fn queue(&self) -> Option<&QueueSnapshot> {
        self.queue.as_ref()
    }

    pub fn stats(&self) -> Option<&StatsSnapshot> {
        self.stats.as_ref()
    }

    pub fn last_update_timestamp(&self) -> &Option<String> {
        &self.last_update_timestamp
    }

    /// Progress of the tracked batch against the latest queue length.
    pub fn progress(&self) -> QueueProgress {
        match &self.queue {
            Some(queue) => QueueProgress::compute(self.total_emails, queue.queue_length),
            None => QueueProgress::default(),
        }
    }

    // Setter methods for private fields (for updaters)
    pub fn set_queue(&mut self, snapshot: QueueSnapshot, timestamp: String) {
        self.queue = Some(snapshot);
        self.last_update_timestamp = Some(timestamp);
    }

    pub fn set_stats(&mut self, snapshot: StatsSnapshot, timestamp: String) {
        self.stats = Some(snapshot);
        self.last_update_timestamp = Some(timestamp);
    }

    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push_back(notice);
    }

    /// The notice currently on screen.
    pub fn current_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    pub fn upload_input(&self) -> Option<&str> {
        self.upload_input.as_deref()
    }

    pub fn open_upload_input(&mut self) {
        self.upload_input.get_or_insert_with(String::new);
    }

    pub fn upload_input_mut(&mut self) -> Option<&mut String> {
        self.upload_input.as_mut()
    }

    /// Closes the upload line and returns what was typed.
    pub fn take_upload_input(&mut self) -> Option<String> {
        self.upload_input.take()
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: WorkerEvent) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: WorkerEvent) {
        self.pending_events.push_back(event);
    }
}
