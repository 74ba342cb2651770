//! One-shot commands: upload a batch or print a status snapshot, then exit.

use crate::backend::Backend;
use crate::backend::error::BackendError;
use crate::backend::types::{QueueSnapshot, StatsSnapshot};
use crate::consts::cli_consts::{EVENT_QUEUE_SIZE, MAX_PENDING_ROWS};
use crate::controller::{BatchOutcome, ControllerError, DashboardController};
use crate::events::Event;
use crate::session::headless_mode::headless_line;
use crate::ui::UIConfig;
use crate::ui::dashboard::DashboardState;
use crate::workers::core::EventSender;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Uploads one batch and returns the console lines it produced, in order.
pub async fn upload_once(
    backend: Arc<dyn Backend>,
    path: &Path,
) -> (Result<Option<BatchOutcome>, ControllerError>, Vec<String>) {
    let backend_url = backend.base_url();
    let (sender, mut receiver) = mpsc::channel::<Event>(EVENT_QUEUE_SIZE);
    let controller = DashboardController::new(backend, EventSender::new(sender));

    let result = controller.submit_batch(Some(path)).await;
    drop(controller);

    let mut state = DashboardState::new(backend_url, Instant::now(), UIConfig::new(false, 0));
    let mut lines = Vec::new();
    while let Some(event) = receiver.recv().await {
        lines.extend(headless_line(&mut state, event));
    }
    (result, lines)
}

/// Fetches both snapshots concurrently.
pub async fn fetch_status(
    backend: &dyn Backend,
) -> Result<(QueueSnapshot, StatsSnapshot), BackendError> {
    let (queue, stats) = tokio::join!(backend.get_queue(), backend.get_stats());
    Ok((queue?, stats?))
}

/// Console lines describing one status snapshot.
pub fn format_status(queue: &QueueSnapshot, stats: &StatsSnapshot) -> Vec<String> {
    let mut lines = vec![
        format!("Queue length: {}", queue.queue_length),
        format!("Sent: {}", stats.sent),
        format!("Failed: {}", stats.failed),
    ];
    for job in queue.pending.iter().take(MAX_PENDING_ROWS) {
        lines.push(format!("  {} (retry {})", job.email, job.retry_count));
    }
    let hidden = (queue.queue_length as usize).saturating_sub(MAX_PENDING_ROWS);
    if hidden > 0 && !queue.pending.is_empty() {
        lines.push(format!("  ... and {} more", hidden));
    }
    lines
}
