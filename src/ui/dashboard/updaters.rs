//! Dashboard state update logic
//!
//! Applies worker events to the dashboard state

use super::state::DashboardState;

use crate::events::{Event as WorkerEvent, Payload};

impl DashboardState {
    /// Advance one frame: bump the tick and apply every queued event in order.
    pub fn update(&mut self) {
        self.tick += 1;

        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            if event.should_display() {
                self.add_to_activity_log(event);
            }
        }
    }

    /// Process a single event and update relevant state
    fn process_event(&mut self, event: &WorkerEvent) {
        let Some(payload) = &event.payload else {
            return;
        };
        match payload {
            Payload::Queue(snapshot) => self.set_queue(snapshot.clone(), event.timestamp.clone()),
            Payload::Stats(snapshot) => self.set_stats(*snapshot, event.timestamp.clone()),
            Payload::TotalEmails(total) => self.record_batch_total(*total),
            Payload::Notice(notice) => self.push_notice(notice.clone()),
        }
    }
}
