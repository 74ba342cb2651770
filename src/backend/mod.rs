use crate::backend::error::BackendError;
use crate::backend::types::{QueueSnapshot, StatsSnapshot, UploadResult};

pub(crate) mod client;
pub use client::BackendClient;
pub mod error;
pub mod types;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// Base address every endpoint is resolved against.
    fn base_url(&self) -> String;

    /// Posts one CSV batch as the multipart field `emails`.
    async fn upload_batch(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadResult, BackendError>;

    /// Number of emails still waiting, plus the head of the queue.
    async fn get_queue(&self) -> Result<QueueSnapshot, BackendError>;

    /// Cumulative sent/failed counters.
    async fn get_stats(&self) -> Result<StatsSnapshot, BackendError>;
}
