//! Wire types returned by the queue backend.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Text returned by `/upload`. Shown to the user verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadResult(pub String);

impl Display for UploadResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cumulative counters since the backend process started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub sent: u64,
    pub failed: u64,
}

impl StatsSnapshot {
    /// Emails the backend is done with, successfully or not.
    pub fn processed(&self) -> u64 {
        self.sent.saturating_add(self.failed)
    }
}

/// A job still waiting in the backend queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingJob {
    pub email: String,
    #[serde(default)]
    pub retry_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub queue_length: u64,
    /// Head of the queue. Older backends omit it, and an empty queue may be sent as `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pending: Vec<PendingJob>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<PendingJob>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<PendingJob>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_snapshot_accepts_pending_list() {
        let json = r#"{"queue_length":2,"pending":[{"email":"a@x.io","retry_count":0},{"email":"b@x.io","retry_count":2}]}"#;
        let snapshot: QueueSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.queue_length, 2);
        assert_eq!(snapshot.pending.len(), 2);
        assert_eq!(snapshot.pending[1].retry_count, 2);
    }

    #[test]
    fn queue_snapshot_tolerates_missing_or_null_pending() {
        let bare: QueueSnapshot = serde_json::from_str(r#"{"queue_length":4}"#).unwrap();
        assert_eq!(bare.queue_length, 4);
        assert!(bare.pending.is_empty());

        let null: QueueSnapshot =
            serde_json::from_str(r#"{"queue_length":0,"pending":null}"#).unwrap();
        assert!(null.pending.is_empty());
    }

    #[test]
    fn stats_snapshot_processed_sums_counters() {
        let stats: StatsSnapshot = serde_json::from_str(r#"{"sent":7,"failed":3}"#).unwrap();
        assert_eq!(stats.processed(), 10);

        let huge = StatsSnapshot {
            sent: u64::MAX,
            failed: 1,
        };
        assert_eq!(huge.processed(), u64::MAX);
    }

    #[test]
    fn negative_counters_are_rejected() {
        assert!(serde_json::from_str::<StatsSnapshot>(r#"{"sent":-1,"failed":0}"#).is_err());
    }
}
