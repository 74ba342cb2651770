//! Dashboard controller
//!
//! Owns the upload path and the render cycle. Results never touch display
//! state directly: they are published as events and applied by the dashboard.

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::backend::types::{StatsSnapshot, UploadResult};
use crate::error_classifier::ErrorClassifier;
use crate::events::{Event, EventType, NoticeKind, Worker};
use crate::logging::LogLevel;
use crate::workers::core::EventSender;
use crate::workers::poller::{PollHandle, spawn_poller};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// File name sent with the upload when the path has none.
const FALLBACK_FILE_NAME: &str = "emails.csv";

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// What a successful upload left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub result: UploadResult,
    pub stats: StatsSnapshot,
}

impl BatchOutcome {
    /// The total the dashboard tracks from now on.
    pub fn total_emails(&self) -> u64 {
        self.stats.processed()
    }
}

#[derive(Clone)]
pub struct DashboardController {
    backend: Arc<dyn Backend>,
    events: EventSender,
    classifier: ErrorClassifier,
}

impl fmt::Debug for DashboardController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardController")
            .field("backend_url", &self.backend.base_url())
            .finish_non_exhaustive()
    }
}

impl DashboardController {
    pub fn new(backend: Arc<dyn Backend>, events: EventSender) -> Self {
        Self {
            backend,
            events,
            classifier: ErrorClassifier::new(),
        }
    }

    pub fn backend_url(&self) -> String {
        self.backend.base_url()
    }

    /// Uploads the selected CSV and re-bases the tracked total on fresh stats.
    ///
    /// `None` is a silent no-op. Every failure is reported as an error notice
    /// before being returned, and leaves the tracked total untouched.
    pub async fn submit_batch(
        &self,
        path: Option<&Path>,
    ) -> Result<Option<BatchOutcome>, ControllerError> {
        let Some(path) = path else {
            return Ok(None);
        };

        match self.upload_and_fetch_stats(path).await {
            Ok(outcome) => {
                let total = outcome.total_emails();
                log::info!("Batch {} accepted, tracking {} emails", path.display(), total);
                self.events.send_event(Event::total_emails(total)).await;
                self.refresh().await;
                Ok(Some(outcome))
            }
            Err(e) => {
                let level = self.classifier.classify_upload_error(&e);
                log::warn!("Upload of {} failed: {}", path.display(), e);
                self.events
                    .send_notice(NoticeKind::Error, format!("Upload failed: {}", e), level)
                    .await;
                Err(e)
            }
        }
    }

    async fn upload_and_fetch_stats(&self, path: &Path) -> Result<BatchOutcome, ControllerError> {
        let contents = tokio::fs::read(path)
            .await
            .map_err(|source| ControllerError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(FALLBACK_FILE_NAME);

        self.events
            .send_upload_event(
                format!("Uploading {} ({} bytes)", file_name, contents.len()),
                EventType::Refresh,
                LogLevel::Info,
            )
            .await;

        let result = self.backend.upload_batch(file_name, contents).await?;
        self.events
            .send_notice(NoticeKind::Info, result.to_string(), LogLevel::Info)
            .await;

        let stats = self.backend.get_stats().await?;
        Ok(BatchOutcome { result, stats })
    }

    /// One render cycle: fetch queue and stats independently and publish each
    /// as soon as it arrives. A failed fetch keeps the previous values on screen.
    pub async fn refresh(&self) {
        tokio::join!(self.publish_queue(), self.publish_stats());
    }

    async fn publish_queue(&self) {
        match self.backend.get_queue().await {
            Ok(snapshot) => {
                self.events
                    .send_event(Event::queue(Worker::Poller, snapshot))
                    .await
            }
            Err(e) => self.report_fetch_error("queue", &e).await,
        }
    }

    async fn publish_stats(&self) {
        match self.backend.get_stats().await {
            Ok(snapshot) => {
                self.events
                    .send_event(Event::stats(Worker::Poller, snapshot))
                    .await
            }
            Err(e) => self.report_fetch_error("stats", &e).await,
        }
    }

    async fn report_fetch_error(&self, what: &str, error: &BackendError) {
        let level = self.classifier.classify_fetch_error(error);
        log::warn!("Failed to fetch {}: {}", what, error);
        self.events
            .send_poll_event(
                format!("Failed to fetch {}: {}", what, error),
                EventType::Error,
                level,
            )
            .await;
    }

    /// Starts the status poll loop. Dropping the handle stops it.
    pub fn start_polling(&self, period: Duration) -> PollHandle {
        spawn_poller(self.clone(), period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockBackend;
    use crate::backend::types::QueueSnapshot;
    use crate::events::{Notice, Payload};
    use std::io::Write;
    use tokio::sync::mpsc;

    fn controller(mock: MockBackend) -> (DashboardController, mpsc::Receiver<Event>) {
        let (sender, receiver) = mpsc::channel(100);
        (
            DashboardController::new(Arc::new(mock), EventSender::new(sender)),
            receiver,
        )
    }

    fn csv_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("batch.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "email").unwrap();
        writeln!(file, "alice@example.com").unwrap();
        writeln!(file, "bob@example.com").unwrap();
        path
    }

    fn drain(receiver: &mut mpsc::Receiver<Event>) -> Vec<Event> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }

    fn payloads(events: &[Event]) -> Vec<Payload> {
        events.iter().filter_map(|e| e.payload.clone()).collect()
    }

    #[tokio::test]
    async fn no_file_selected_makes_no_calls() {
        let mut mock = MockBackend::new();
        mock.expect_upload_batch().never();
        mock.expect_get_stats().never();
        mock.expect_get_queue().never();
        let (controller, mut receiver) = controller(mock);

        let outcome = controller.submit_batch(None).await.unwrap();

        assert!(outcome.is_none());
        assert!(drain(&mut receiver).is_empty());
    }

    #[tokio::test]
    async fn successful_upload_tracks_sent_plus_failed() {
        let dir = tempfile::tempdir().unwrap();
        let path = csv_file(&dir);

        let mut mock = MockBackend::new();
        mock.expect_upload_batch()
            .withf(|name, contents| name.ends_with("batch.csv") && contents.starts_with(b"email"))
            .times(1)
            .returning(|_, _| Ok(UploadResult("Added 2 emails to queue".to_string())));
        // Once to re-base the total, once for the render cycle.
        mock.expect_get_stats()
            .times(2)
            .returning(|| Ok(StatsSnapshot { sent: 7, failed: 3 }));
        mock.expect_get_queue().times(1).returning(|| {
            Ok(QueueSnapshot {
                queue_length: 4,
                pending: Vec::new(),
            })
        });
        let (controller, mut receiver) = controller(mock);

        let outcome = controller.submit_batch(Some(&path)).await.unwrap().unwrap();
        assert_eq!(outcome.total_emails(), 10);
        assert_eq!(outcome.result.to_string(), "Added 2 emails to queue");

        let payloads = payloads(&drain(&mut receiver));
        assert_eq!(payloads.len(), 4);
        assert_eq!(
            payloads[0],
            Payload::Notice(Notice {
                kind: NoticeKind::Info,
                text: "Added 2 emails to queue".to_string(),
            })
        );
        // The total is published before its own render cycle.
        assert_eq!(payloads[1], Payload::TotalEmails(10));
        assert!(payloads[2..].contains(&Payload::Stats(StatsSnapshot { sent: 7, failed: 3 })));
        assert!(payloads[2..].iter().any(|p| matches!(p, Payload::Queue(q) if q.queue_length == 4)));
    }

    #[tokio::test]
    async fn rejected_upload_reports_error_and_keeps_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = csv_file(&dir);

        let mut mock = MockBackend::new();
        mock.expect_upload_batch().returning(|_, _| {
            Err(BackendError::Http {
                status: 400,
                message: "Invalid CSV".to_string(),
            })
        });
        mock.expect_get_stats().never();
        mock.expect_get_queue().never();
        let (controller, mut receiver) = controller(mock);

        let err = controller.submit_batch(Some(&path)).await.unwrap_err();
        assert!(matches!(
            err,
            ControllerError::Backend(BackendError::Http { status: 400, .. })
        ));

        let payloads = payloads(&drain(&mut receiver));
        assert_eq!(
            payloads,
            vec![Payload::Notice(Notice {
                kind: NoticeKind::Error,
                text: "Upload failed: HTTP error with status 400: Invalid CSV".to_string(),
            })]
        );
    }

    #[tokio::test]
    async fn stats_failure_after_upload_keeps_total() {
        let dir = tempfile::tempdir().unwrap();
        let path = csv_file(&dir);

        let mut mock = MockBackend::new();
        mock.expect_upload_batch()
            .returning(|_, _| Ok(UploadResult("Added 2 emails to queue".to_string())));
        mock.expect_get_stats().times(1).returning(|| {
            Err(BackendError::Http {
                status: 503,
                message: "busy".to_string(),
            })
        });
        mock.expect_get_queue().never();
        let (controller, mut receiver) = controller(mock);

        assert!(controller.submit_batch(Some(&path)).await.is_err());

        let payloads = payloads(&drain(&mut receiver));
        assert_eq!(payloads.len(), 2);
        assert!(matches!(&payloads[0], Payload::Notice(n) if n.kind == NoticeKind::Info));
        assert!(matches!(&payloads[1], Payload::Notice(n) if n.kind == NoticeKind::Error));
        assert!(!payloads.iter().any(|p| matches!(p, Payload::TotalEmails(_))));
    }

    #[tokio::test]
    async fn missing_file_is_reported_without_network_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.csv");

        let mut mock = MockBackend::new();
        mock.expect_upload_batch().never();
        mock.expect_get_stats().never();
        let (controller, mut receiver) = controller(mock);

        let err = controller.submit_batch(Some(&path)).await.unwrap_err();
        assert!(matches!(err, ControllerError::ReadFile { .. }));

        let events = drain(&mut receiver);
        assert_eq!(events.len(), 1);
        assert!(events[0].msg.starts_with("Upload failed: Failed to read"));
    }

    #[tokio::test]
    async fn refresh_failure_is_logged_not_published_as_data() {
        let mut mock = MockBackend::new();
        mock.expect_get_queue().returning(|| {
            Err(BackendError::Http {
                status: 500,
                message: "boom".to_string(),
            })
        });
        mock.expect_get_stats()
            .returning(|| Ok(StatsSnapshot { sent: 1, failed: 0 }));
        let (controller, mut receiver) = controller(mock);

        controller.refresh().await;

        let events = drain(&mut receiver);
        assert_eq!(events.len(), 2);
        let error = events
            .iter()
            .find(|e| e.event_type == EventType::Error)
            .unwrap();
        assert_eq!(error.log_level, LogLevel::Warn);
        assert!(error.payload.is_none());
        assert!(events
            .iter()
            .any(|e| e.payload == Some(Payload::Stats(StatsSnapshot { sent: 1, failed: 0 }))));
    }
}
