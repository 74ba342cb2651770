//! Session setup and initialization

use crate::backend::BackendClient;
use crate::controller::DashboardController;
use crate::events::Event;
use crate::workers::core::EventSender;
use crate::workers::poller::PollHandle;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};

/// Session data for both TUI and headless modes
#[derive(Debug)]
pub struct SessionData {
    /// Event receiver for worker events
    pub event_receiver: mpsc::Receiver<Event>,
    /// Upload path and manual refreshes
    pub controller: DashboardController,
    /// Running poll loop; released at teardown
    pub poll_handle: PollHandle,
    /// Shutdown sender to stop the session
    pub shutdown_sender: broadcast::Sender<()>,
    /// Backend base URL (for display purposes)
    pub backend_url: String,
    /// Poll interval (for display purposes)
    pub poll_interval: Duration,
}

/// Sets up a dashboard session
///
/// This function handles all the common setup required for both TUI and headless modes:
/// 1. Creates the backend client and event channel
/// 2. Starts the poll loop
/// 3. Submits the initial batch, if one was given
///
/// # Arguments
/// * `backend_url` - Resolved backend base URL
/// * `poll_interval` - Interval between status polls
/// * `initial_file` - CSV to upload right after start
pub async fn setup_session(
    backend_url: String,
    poll_interval: Duration,
    initial_file: Option<PathBuf>,
) -> Result<SessionData, Box<dyn Error>> {
    let client = BackendClient::new(backend_url.clone())?;
    let (event_sender, event_receiver) =
        mpsc::channel::<Event>(crate::consts::cli_consts::EVENT_QUEUE_SIZE);
    let controller = DashboardController::new(Arc::new(client), EventSender::new(event_sender));

    log::info!(
        "Polling {} every {}ms",
        backend_url,
        poll_interval.as_millis()
    );
    let poll_handle = controller.start_polling(poll_interval);

    if let Some(path) = initial_file {
        let controller = controller.clone();
        tokio::spawn(async move {
            // Failures already reached the user as a notice.
            let _ = controller.submit_batch(Some(&path)).await;
        });
    }

    // Create shutdown channel - only one shutdown signal needed
    let (shutdown_sender, _) = broadcast::channel(1);

    Ok(SessionData {
        event_receiver,
        controller,
        poll_handle,
        shutdown_sender,
        backend_url,
        poll_interval,
    })
}
