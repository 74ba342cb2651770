//! Status polling on a fixed interval

use crate::controller::DashboardController;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Disposal handle for a running poll loop.
///
/// Dropping it cancels the loop and any refresh still in flight.
#[derive(Debug)]
pub struct PollHandle {
    cancel: CancellationToken,
    join: Option<JoinHandle<()>>,
}

impl PollHandle {
    /// Stops the loop and waits until it has exited.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(join) = self.join.take() {
            let _ = join.await;
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Spawns the poll loop. The first tick fires immediately.
///
/// Every tick spawns its own refresh, so a slow backend never stretches the
/// period; refreshes from consecutive ticks may overlap. Ticks missed while
/// the runtime was stalled are skipped, not replayed.
pub fn spawn_poller(controller: DashboardController, period: Duration) -> PollHandle {
    let cancel = CancellationToken::new();
    let token = cancel.clone();

    let join = tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut ticks: u64 = 0;
        loop {
            tokio::select! {
                _ = token.cancelled() => {
                    log::debug!("Poll loop stopped after {} ticks", ticks);
                    break;
                }
                _ = ticker.tick() => {
                    ticks += 1;
                    let controller = controller.clone();
                    let token = token.clone();
                    tokio::spawn(async move {
                        tokio::select! {
                            _ = token.cancelled() => {}
                            _ = controller.refresh() => {}
                        }
                    });
                }
            }
        }
    });

    PollHandle {
        cancel,
        join: Some(join),
    }
}
